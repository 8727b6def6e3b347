//! Supported fluid identities.

use crate::error::FluidError;

/// Pure liquids with built-in constants and boiling curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    /// Acetone (C₃H₆O), measured boiling table
    Acetone,
    /// Decafluoropentane (C₅H₂F₁₀), Antoine-fit boiling curve
    Decafluoropentane,
}

impl Species {
    pub const ALL: [Species; 2] = [Species::Acetone, Species::Decafluoropentane];

    pub fn key(&self) -> &'static str {
        match self {
            Species::Acetone => "acetone",
            Species::Decafluoropentane => "decafluoropentane",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::Acetone => "Acetone",
            Species::Decafluoropentane => "Decafluoropentane",
        }
    }

    /// Short alias accepted by the parser.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Species::Acetone => "ace",
            Species::Decafluoropentane => "dfp",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Species {
    type Err = FluidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "acetone" | "ace" => Ok(Species::Acetone),
            "decafluoropentane" | "dfp" => Ok(Species::Decafluoropentane),
            _ => Err(FluidError::UnsupportedFluid { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive_over_aliases() {
        assert_eq!("acetone".parse::<Species>().unwrap(), Species::Acetone);
        assert_eq!("ACE".parse::<Species>().unwrap(), Species::Acetone);
        assert_eq!(" Dfp ".parse::<Species>().unwrap(), Species::Decafluoropentane);
        assert_eq!(
            "DecaFluoroPentane".parse::<Species>().unwrap(),
            Species::Decafluoropentane
        );
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = "water".parse::<Species>().unwrap_err();
        assert_eq!(
            err,
            FluidError::UnsupportedFluid {
                name: "water".into()
            }
        );
        assert!("".parse::<Species>().is_err());
    }

    #[test]
    fn canonical_keys_roundtrip() {
        for species in Species::ALL {
            assert_eq!(species.key().parse::<Species>().unwrap(), species);
            assert_eq!(species.abbreviation().parse::<Species>().unwrap(), species);
        }
    }
}
