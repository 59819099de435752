use std::fmt;

/// Continuity constraint between the two handles of an anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TangentMode {
    /// Handles move independently.
    #[default]
    Free,
    /// Handles point in opposite directions; their distances are independent.
    Aligned,
    /// Handles are reflections of each other through the anchor.
    Mirrored,
}

impl TangentMode {
    /// Every mode, least to most constrained.
    pub const ALL: [TangentMode; 3] = [
        TangentMode::Free,
        TangentMode::Aligned,
        TangentMode::Mirrored,
    ];

    /// Whether this mode constrains the opposite handle.
    pub fn is_constrained(self) -> bool {
        self != TangentMode::Free
    }
}

impl fmt::Display for TangentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TangentMode::Free => "free",
            TangentMode::Aligned => "aligned",
            TangentMode::Mirrored => "mirrored",
        };
        f.write_str(name)
    }
}
