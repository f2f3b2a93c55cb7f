//! Concept names and term types.

/// Term types in the order a display name is preferred.
pub const PREFERRED_TTYS: [&str; 8] = ["BN", "IN", "PIN", "SBDC", "SCDC", "SBD", "SCD", "MIN"];

/// One English atom of a concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptName {
    pub name: String,
    pub tty: String,
    pub rxaui: String,
}

impl ConceptName {
    /// `"<name> [<tty>]"`
    pub fn display(&self) -> String {
        format!("{} [{}]", self.name, self.tty)
    }
}

/// The best display name: first match in [`PREFERRED_TTYS`], else the first name.
pub fn preferred_name(names: &[ConceptName]) -> Option<&ConceptName> {
    PREFERRED_TTYS
        .iter()
        .find_map(|tty| names.iter().find(|name| name.tty == *tty))
        .or_else(|| names.first())
}

/// Map a term type to a DOT shape.
pub fn shape_for_tty(tty: &str) -> &'static str {
    match tty {
        // Ingredients: rectangle
        "IN" | "PIN" | "MIN" => "box",
        // Brand names
        "BN" => "octagon",
        // Components and dose form groups
        "SCDC" | "SBDC" | "SCDF" | "SBDF" | "SCDG" | "SBDG" => "note",
        // Dose forms
        "DF" | "DFG" => "diamond",
        // Clinical and branded drugs, packs, everything else
        _ => "ellipse",
    }
}
