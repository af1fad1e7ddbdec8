use serde::{Deserialize, Serialize};

/// A user's profile as held by the settings form.
///
/// Every value is kept as the raw text of its input. The birth date is in
/// `YYYY-MM-DD` form, or empty when unknown. The record has no identifier
/// of its own: it is keyed externally by the wallet address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub residence: String,
    pub birth_date: String,
}

/// The editable fields of a [`ProfileRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Phone,
    Residence,
    BirthDate,
}

impl ProfileField {
    /// All fields in form order
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Residence,
        ProfileField::BirthDate,
    ];

    /// Name used both for the input element and the JSON key on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "nombre",
            ProfileField::LastName => "apellido",
            ProfileField::Email => "email",
            ProfileField::Phone => "telefono",
            ProfileField::Residence => "lugarResidencia",
            ProfileField::BirthDate => "fechaNacimiento",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.wire_name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Email",
            ProfileField::Phone => "Phone",
            ProfileField::Residence => "Location",
            ProfileField::BirthDate => "Birth Date",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            ProfileField::Email => "email",
            ProfileField::Phone => "tel",
            ProfileField::BirthDate => "date",
            _ => "text",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ProfileField::FirstName => Some("Enter your first name"),
            ProfileField::LastName => Some("Enter your last name"),
            ProfileField::Email => Some("Enter your email"),
            ProfileField::Phone => Some("Enter your phone number"),
            ProfileField::Residence => Some("Enter your location"),
            ProfileField::BirthDate => None,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            ProfileField::FirstName | ProfileField::LastName | ProfileField::Email
        )
    }
}

impl ProfileRecord {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::Residence => &self.residence,
            ProfileField::BirthDate => &self.birth_date,
        }
    }

    /// Replaces one field, leaving the others untouched
    pub fn set(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::Residence => &mut self.residence,
            ProfileField::BirthDate => &mut self.birth_date,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        ProfileField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}
