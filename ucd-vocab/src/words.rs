//! Controlled vocabulary of UCD1+ words.
//!
//! Descriptor parsing is lenient: each `;`-separated piece is accepted
//! only if it resolves against this word list (default namespace) or is
//! syntactically well-formed (explicit namespace). The table below is a
//! curated subset of the IVOA UCD1+ word list covering the families in
//! [`crate::roots`].
//!
//! UCD words are case-insensitive; the table stores the canonical casing
//! and [`canonical`] normalizes input to it, so `POS.EQ.RA` indexes the
//! same atoms as `pos.eq.ra`.

/// Canonical UCD1+ words, grouped by family.
pub const WORDS: &[&str] = &[
    // ------------------------------------------------------------------
    // arith - arithmetics
    // ------------------------------------------------------------------
    "arith.diff",
    "arith.factor",
    "arith.grad",
    "arith.rate",
    "arith.ratio",
    "arith.squared",
    "arith.zp",
    // ------------------------------------------------------------------
    // em - electromagnetic spectrum
    // ------------------------------------------------------------------
    "em.IR",
    "em.IR.H",
    "em.IR.J",
    "em.IR.K",
    "em.UV",
    "em.X-ray",
    "em.energy",
    "em.freq",
    "em.gamma",
    "em.line",
    "em.mm",
    "em.opt",
    "em.opt.B",
    "em.opt.I",
    "em.opt.R",
    "em.opt.U",
    "em.opt.V",
    "em.radio",
    "em.wavenumber",
    "em.wl",
    "em.wl.central",
    "em.wl.effective",
    // ------------------------------------------------------------------
    // instr - instrument
    // ------------------------------------------------------------------
    "instr.background",
    "instr.bandpass",
    "instr.bandwidth",
    "instr.beam",
    "instr.calib",
    "instr.det",
    "instr.filter",
    "instr.fov",
    "instr.obsty",
    "instr.pixel",
    "instr.plate",
    "instr.setup",
    "instr.tel",
    // ------------------------------------------------------------------
    // meta - metadata
    // ------------------------------------------------------------------
    "meta.bib",
    "meta.bib.author",
    "meta.bib.bibcode",
    "meta.bib.journal",
    "meta.bib.page",
    "meta.bib.volume",
    "meta.code",
    "meta.code.error",
    "meta.code.mime",
    "meta.code.qual",
    "meta.code.status",
    "meta.curation",
    "meta.dataset",
    "meta.email",
    "meta.file",
    "meta.fits",
    "meta.id",
    "meta.id.CoI",
    "meta.id.PI",
    "meta.id.assoc",
    "meta.id.cross",
    "meta.id.parent",
    "meta.main",
    "meta.note",
    "meta.number",
    "meta.preview",
    "meta.record",
    "meta.ref",
    "meta.ref.doi",
    "meta.ref.url",
    "meta.software",
    "meta.table",
    "meta.title",
    "meta.unit",
    "meta.url",
    "meta.version",
    // ------------------------------------------------------------------
    // obs - observation
    // ------------------------------------------------------------------
    "obs.airMass",
    "obs.atmos",
    "obs.calib",
    "obs.exposure",
    "obs.field",
    "obs.image",
    "obs.observer",
    "obs.param",
    "obs.proposal",
    "obs.sequence",
    // ------------------------------------------------------------------
    // phot - photometry
    // ------------------------------------------------------------------
    "phot.antennaTemp",
    "phot.calib",
    "phot.color",
    "phot.color.excess",
    "phot.count",
    "phot.fluence",
    "phot.flux",
    "phot.flux.density",
    "phot.limbDark",
    "phot.mag",
    "phot.mag.bc",
    "phot.mag.distMod",
    "phot.mag.reddFree",
    "phot.radiance",
    // ------------------------------------------------------------------
    // phys - physics
    // ------------------------------------------------------------------
    "phys.abund",
    "phys.absorption",
    "phys.acceleration",
    "phys.albedo",
    "phys.angMomentum",
    "phys.angSize",
    "phys.area",
    "phys.columnDensity",
    "phys.composition",
    "phys.density",
    "phys.dispMeasure",
    "phys.energy",
    "phys.entropy",
    "phys.gravity",
    "phys.luminosity",
    "phys.magAbs",
    "phys.magField",
    "phys.mass",
    "phys.opacity",
    "phys.particle",
    "phys.polarization",
    "phys.pressure",
    "phys.size",
    "phys.size.axisRatio",
    "phys.size.diameter",
    "phys.size.radius",
    "phys.temperature",
    "phys.veloc",
    "phys.veloc.dispersion",
    "phys.veloc.escape",
    "phys.veloc.expansion",
    "phys.veloc.orbital",
    "phys.veloc.rotat",
    "phys.virial",
    // ------------------------------------------------------------------
    // pos - positional data
    // ------------------------------------------------------------------
    "pos",
    "pos.angDistance",
    "pos.angResolution",
    "pos.az",
    "pos.az.alt",
    "pos.az.azi",
    "pos.az.zd",
    "pos.barycenter",
    "pos.cartesian",
    "pos.cartesian.x",
    "pos.cartesian.y",
    "pos.cartesian.z",
    "pos.distance",
    "pos.earth",
    "pos.earth.altitude",
    "pos.earth.lat",
    "pos.earth.lon",
    "pos.ecliptic",
    "pos.ecliptic.lat",
    "pos.ecliptic.lon",
    "pos.eq",
    "pos.eq.dec",
    "pos.eq.ha",
    "pos.eq.ra",
    "pos.errorEllipse",
    "pos.frame",
    "pos.galactic",
    "pos.galactic.lat",
    "pos.galactic.lon",
    "pos.galactocentric",
    "pos.geocentric",
    "pos.healpix",
    "pos.heliocentric",
    "pos.lsr",
    "pos.outline",
    "pos.parallax",
    "pos.parallax.phot",
    "pos.parallax.spect",
    "pos.parallax.trig",
    "pos.pm",
    "pos.posAng",
    "pos.precess",
    "pos.resolution",
    "pos.wcs",
    // ------------------------------------------------------------------
    // spect - spectral data
    // ------------------------------------------------------------------
    "spect.binSize",
    "spect.continuum",
    "spect.dopplerParam",
    "spect.dopplerVeloc",
    "spect.dopplerVeloc.opt",
    "spect.dopplerVeloc.radio",
    "spect.index",
    "spect.line",
    "spect.line.asymmetry",
    "spect.line.broad",
    "spect.line.eqWidth",
    "spect.line.intensity",
    "spect.line.profile",
    "spect.line.strength",
    "spect.line.width",
    "spect.resolution",
    // ------------------------------------------------------------------
    // src - source
    // ------------------------------------------------------------------
    "src",
    "src.calib",
    "src.class",
    "src.class.color",
    "src.class.distance",
    "src.class.luminosity",
    "src.class.richness",
    "src.class.starGalaxy",
    "src.class.struct",
    "src.density",
    "src.ellipticity",
    "src.morph",
    "src.morph.param",
    "src.morph.scLength",
    "src.morph.type",
    "src.net",
    "src.orbital",
    "src.orbital.eccentricity",
    "src.orbital.inclination",
    "src.orbital.node",
    "src.orbital.periastron",
    "src.redshift",
    "src.redshift.phot",
    "src.sample",
    "src.spType",
    "src.var",
    "src.var.amplitude",
    "src.var.index",
    "src.var.pulse",
    // ------------------------------------------------------------------
    // stat - statistics
    // ------------------------------------------------------------------
    "stat.asymmetry",
    "stat.correlation",
    "stat.error",
    "stat.error.sys",
    "stat.filling",
    "stat.fit",
    "stat.fit.chi2",
    "stat.fit.dof",
    "stat.fit.goodness",
    "stat.fit.omc",
    "stat.fit.param",
    "stat.fit.residual",
    "stat.fwhm",
    "stat.likelihood",
    "stat.max",
    "stat.mean",
    "stat.median",
    "stat.min",
    "stat.param",
    "stat.probability",
    "stat.rank",
    "stat.snr",
    "stat.stdev",
    "stat.uncalib",
    "stat.value",
    "stat.variance",
    "stat.weight",
    // ------------------------------------------------------------------
    // time
    // ------------------------------------------------------------------
    "time",
    "time.age",
    "time.creation",
    "time.crossing",
    "time.duration",
    "time.end",
    "time.epoch",
    "time.equinox",
    "time.interval",
    "time.lifetime",
    "time.period",
    "time.period.revolution",
    "time.period.rotation",
    "time.phase",
    "time.processing",
    "time.publiYear",
    "time.release",
    "time.resolution",
    "time.scale",
    "time.start",
];

/// Resolve `text` against the controlled vocabulary, case-insensitively.
///
/// Returns the canonical casing when the word is recognized.
pub fn canonical(text: &str) -> Option<&'static str> {
    WORDS.iter().copied().find(|w| w.eq_ignore_ascii_case(text))
}

/// True when `text` is in the controlled vocabulary.
pub fn is_recognized(text: &str) -> bool {
    canonical(text).is_some()
}

/// Syntactic word check: one or more non-empty dot-separated atoms over
/// ASCII alphanumerics, `-` and `_`. Used for words in non-default
/// namespaces, which are not vocabulary-checked.
pub fn is_syntactic_word(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        })
}
