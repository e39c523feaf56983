//! Recommended chord-form color groups
//!
//! The five form groups are cosmetic color buckets, not voicing data:
//! they divide the chord tones into stable colors so a given cell always
//! renders the same way. When a single form is selected every chord cell
//! takes that form's color instead.

/// A form group's name and display colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormGroup {
    pub name: &'static str,
    pub fill: &'static str,
    pub text: &'static str,
}

/// The five fixed form groups, in combo-box order.
pub const FORM_GROUPS: [FormGroup; 5] = [
    FormGroup {
        name: "Form 1 (Red)",
        fill: "#d32f2f",
        text: "white",
    },
    FormGroup {
        name: "Form 2 (Blue)",
        fill: "#1976d2",
        text: "white",
    },
    FormGroup {
        name: "Form 3 (Green)",
        fill: "#388e3c",
        text: "white",
    },
    FormGroup {
        name: "Form 4 (Purple)",
        fill: "#7b1fa2",
        text: "white",
    },
    FormGroup {
        name: "Form 5 (Orange)",
        fill: "#f57c00",
        text: "black",
    },
];

/// Form names in combo-box order.
pub fn form_names() -> Vec<&'static str> {
    FORM_GROUPS.iter().map(|g| g.name).collect()
}

/// True when `name` is one of the fixed form groups.
pub fn is_form_name(name: &str) -> bool {
    FORM_GROUPS.iter().any(|g| g.name == name)
}

/// Stable position-based bucket index for the all-forms display. The
/// same cell always lands in the same bucket.
pub fn form_bucket(string: u8, fret: u8) -> usize {
    (string as usize * 13 + fret as usize) % FORM_GROUPS.len()
}

/// Fill and text colors for a chord cell: the selected form's colors
/// when one is chosen, otherwise the cell's position-bucket colors.
pub fn chord_cell_colors(selected_form: Option<&str>, string: u8, fret: u8) -> (&'static str, &'static str) {
    if let Some(name) = selected_form {
        if let Some(group) = FORM_GROUPS.iter().find(|g| g.name == name) {
            return (group.fill, group.text);
        }
    }
    let group = &FORM_GROUPS[form_bucket(string, fret)];
    (group.fill, group.text)
}
