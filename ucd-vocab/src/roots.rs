//! Fixed registry of top-level UCD classification families.
//!
//! Every UCD word starts with one of a small, fixed set of family codes
//! (`meta`, `pos`, `phot`, ...). This module holds that table together
//! with a human description of each family, taken from the UCD1+
//! standard's section headings.
//!
//! ## Invariants
//!
//! - The table is fixed at compile time and never mutated
//! - Iteration and the backing slice are ordered by ascending code
//! - The registry is advisory: the index accepts any first-seen root
//!   token whether or not it appears here
//!
//! The registry is an explicit value passed by reference to whatever
//! tooling needs it, never a process-wide singleton.

use serde::Serialize;
use std::fmt;

/// One top-level classification family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RootFamily {
    /// Family code, the first atom of every word in the family.
    pub code: &'static str,
    /// Short family name.
    pub family_name: &'static str,
    /// Prose description from the standard. Stored in full; the
    /// `Display` listing truncates it.
    pub description: &'static str,
}

/// The fixed family table, ordered by code.
const ROOT_FAMILIES: &[RootFamily] = &[
    RootFamily {
        code: "arith",
        family_name: "arithmetics",
        description: "This section includes concepts involving or indicating some mathematical \
            operation performed on the primary concept or just the presence of an arithmetic \
            factor or operator.",
    },
    RootFamily {
        code: "em",
        family_name: "electromagnetic spectrum",
        description: "This section describes the electromagnetic spectrum, either in a \
            monochromatic way or in predefined intervals. The complete list of proposed bands \
            (in seven classical regions of the e.m. spectrum: radio, millimeter, infrared, \
            optical, ultraviolet, x-ray and gamma-ray), can be found in the document \
            Note-EMSpectrum-20040520",
    },
    RootFamily {
        code: "instr",
        family_name: "instrument",
        description: "This section includes all quantities related to astronomical \
            instrumentation, e.g. detectors (plates, CCDs, etc.), spectrographs, and telescopes \
            (including observatories or missions), etc.",
    },
    RootFamily {
        code: "meta",
        family_name: "metadata",
        description: "This section includes all the information that is not coming directly \
            from a measurement, and information that could not be included in other sections.",
    },
    RootFamily {
        code: "obs",
        family_name: "observation",
        description: "This section includes, in principle under this section should go all \
            words describing an observation (the name of the observer or PI, the observing \
            conditions, the name of the field). In practice, the section is very thin and \
            could be deleted, if the sparse content could be housed elsewere.",
    },
    RootFamily {
        code: "phot",
        family_name: "photometry",
        description: "This section includes all the words describing photometric measures. \
            The definitions distinguish between a flux density (flux per unit frequency \
            interval), a flux density integrated over a given e.m. interval (flux if expressed \
            linearly, mag if expressed by a log), or a flux expressed in counts/s (if the \
            setup of the detector is photon counting observing mode). Colors, which are \
            differences of magnitudes (i.e. ratios of fluxes) measured in different \
            bandpasses, are also included.",
    },
    RootFamily {
        code: "phys",
        family_name: "physics",
        description: "This section includes atomic and molecular data (mainly used for \
            spectroscopy) and basic physical quantities (temperature, mass, gravity, \
            luminosity, etc.)",
    },
    RootFamily {
        code: "pos",
        family_name: "positional data",
        description: "This section describes all quantities related to the position of an \
            object on the sky.",
    },
    RootFamily {
        code: "spect",
        family_name: "spectral data",
        description: "This section includes, for historical reasons, photometric data taken \
            in narrow spectral bands with instruments called spectrographs are classified as \
            spectroscopic data. These definitions should not be confused with those in the \
            'em' category. em represents the independent variable, or dispersion axis, and \
            phot and spect describe the dependent variable, or flux axis.",
    },
    RootFamily {
        code: "src",
        family_name: "source",
        description: "This is a rather generic section, mainly devoted to source \
            classifications. Variability, orbital, and velocity data are also included in \
            this section.",
    },
    RootFamily {
        code: "stat",
        family_name: "statistics",
        description: "This section includes statistical information on measurements.",
    },
    RootFamily {
        code: "time",
        family_name: "time",
        description: "This section includes quantities related to time (age, date, period, \
            etc.) are described in this section.",
    },
];

/// Description width used by the `Display` listing.
const DISPLAY_DESCRIPTION_WIDTH: usize = 50;

/// Read-only table of the top-level classification families.
///
/// Construct once with [`RootRegistry::initialize`] and pass by
/// reference; lookup is by family code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootRegistry {
    families: &'static [RootFamily],
}

impl RootRegistry {
    /// Build the fixed family table.
    pub fn initialize() -> Self {
        Self {
            families: ROOT_FAMILIES,
        }
    }

    /// Look up a family by its code.
    pub fn get(&self, code: &str) -> Option<&'static RootFamily> {
        self.families
            .binary_search_by(|f| f.code.cmp(code))
            .ok()
            .map(|i| &self.families[i])
    }

    /// True when `code` is a registered family code.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Families in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = &'static RootFamily> {
        self.families.iter()
    }

    /// Number of registered families.
    pub fn len(&self) -> usize {
        self.families.len()
    }

    /// Always false: the table is fixed and non-empty.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

impl Default for RootRegistry {
    fn default() -> Self {
        Self::initialize()
    }
}

impl fmt::Display for RootRegistry {
    /// Multi-line human listing: code, underline, family name and a
    /// truncated description. Debug/documentation output, not a stable
    /// machine format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for family in self.families {
            let description: String = family
                .description
                .chars()
                .take(DISPLAY_DESCRIPTION_WIDTH)
                .collect();
            writeln!(f, "\n{}", family.code)?;
            writeln!(f, "{}", "-".repeat(family.code.len()))?;
            writeln!(f, "\tfamily      : {}", family.family_name)?;
            writeln!(f, "\tdescription : {}", description)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_code() {
        let registry = RootRegistry::initialize();
        let codes: Vec<&str> = registry.iter().map(|f| f.code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn all_family_codes_present() {
        let registry = RootRegistry::initialize();
        assert_eq!(registry.len(), 12);
        for code in [
            "arith", "em", "instr", "meta", "obs", "phot", "phys", "pos", "spect", "src",
            "stat", "time",
        ] {
            assert!(registry.contains(code), "missing family {code}");
        }
        assert!(!registry.contains("unknown"));
    }

    #[test]
    fn lookup_returns_metadata() {
        let registry = RootRegistry::initialize();
        let pos = registry.get("pos").unwrap();
        assert_eq!(pos.family_name, "positional data");
        assert!(pos.description.starts_with("This section describes"));
    }

    #[test]
    fn display_truncates_descriptions() {
        let registry = RootRegistry::initialize();
        let listing = registry.to_string();
        assert!(listing.contains("\nmeta\n----\n"));
        // Full descriptions are longer than the display width; the
        // listing must not carry them verbatim.
        let phot = registry.get("phot").unwrap();
        assert!(phot.description.len() > DISPLAY_DESCRIPTION_WIDTH);
        assert!(!listing.contains(phot.description));
    }
}
