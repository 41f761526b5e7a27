//! Detail card shown after a successful search

use shared::Member;

/// One rendered member: label / value rows, dismissible by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub member: Member,
}

impl DetailCard {
    pub fn new(member: Member) -> Self {
        Self { member }
    }

    /// Rows in display order.
    pub fn rows(&self) -> [(&'static str, String); 5] {
        let m = &self.member;
        [
            ("ID", m.id.to_string()),
            ("Nombre", m.first_name.clone()),
            ("Apellido", m.last_name.clone()),
            ("Email", m.email.clone()),
            ("Activo", yes_no(m.active).to_string()),
        ]
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Sí" } else { "No" }
}
