use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for how a hex grid is laid out in world space. This is
/// generally loaded by the caller from whatever config format they use, then
/// turned into a [HexLayout](crate::HexLayout), which validates it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance between the centers of two adjacent tiles, in world units.
    /// This is also the diameter of the circle inscribed in each tile. Must be
    /// positive.
    #[validate(range(min = 0.001, max = 1000000.0))]
    pub grid_scale: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { grid_scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    #[test]
    fn test_serde() {
        assert_tokens(
            &GridConfig { grid_scale: 2.5 },
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 1,
                },
                Token::Str("grid_scale"),
                Token::F64(2.5),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_serde_default() {
        // Missing fields fall back to the default
        assert_de_tokens(
            &GridConfig::default(),
            &[
                Token::Struct {
                    name: "GridConfig",
                    len: 0,
                },
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_validate() {
        assert!(GridConfig::default().validate().is_ok());
        assert!(GridConfig { grid_scale: 0.0 }.validate().is_err());
        assert!(GridConfig { grid_scale: -1.0 }.validate().is_err());
    }
}
