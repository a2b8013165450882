//! Two-step registration wizard: draft, validation, and payload assembly.
//!
//! DESIGN
//! ======
//! Inputs are kept as raw text so the form can show exactly what was typed.
//! [`validate`] is the single place that turns a draft into a
//! [`NewTelefono`]; numeric coercion and the `internos.create` nesting happen
//! there and nowhere else.
//!
//! Moving from step 1 to step 2 is never blocked. Submission validates every
//! field and shows the step holding the first invalid field, so the error is
//! on screen.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use std::collections::BTreeMap;

use crate::net::types::{Estado, InternoInput, NestedCreate, NewTelefono};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    One,
    Two,
}

/// Every input of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Ip,
    Unidad,
    Usuario,
    Rack,
    Boca,
    Anterior,
    Estado,
    Piso,
    Area,
    Lugar,
    Ter,
    Ue,
}

impl Field {
    pub const STEP_ONE: [Field; 5] = [Field::Ip, Field::Unidad, Field::Usuario, Field::Rack, Field::Boca];
    pub const STEP_TWO: [Field; 7] = [
        Field::Anterior,
        Field::Estado,
        Field::Piso,
        Field::Area,
        Field::Lugar,
        Field::Ter,
        Field::Ue,
    ];

    #[must_use]
    pub fn step(self) -> Step {
        if Self::STEP_ONE.contains(&self) { Step::One } else { Step::Two }
    }

    /// DOM id / payload key.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Unidad => "unidad",
            Self::Usuario => "usuario",
            Self::Rack => "rack",
            Self::Boca => "boca",
            Self::Anterior => "anterior",
            Self::Estado => "estado",
            Self::Piso => "piso",
            Self::Area => "area",
            Self::Lugar => "lugar",
            Self::Ter => "ter",
            Self::Ue => "ue",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ip => "IP",
            Self::Unidad => "Unidad",
            Self::Usuario => "Usuario",
            Self::Rack => "Rack",
            Self::Boca => "Boca",
            Self::Anterior => "Anterior",
            Self::Estado => "Estado",
            Self::Piso => "Piso",
            Self::Area => "Área",
            Self::Lugar => "Lugar",
            Self::Ter => "TER",
            Self::Ue => "UE",
        }
    }

    /// Whether the input is numeric (`type="number"`).
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Piso | Self::Lugar | Self::Ter | Self::Ue)
    }

    fn required_message(self) -> &'static str {
        match self {
            Self::Ip => "IP es requerida",
            Self::Unidad => "Unidad es requerida",
            Self::Usuario => "Usuario es requerido",
            Self::Rack => "Rack es requerido",
            Self::Boca => "Boca es requerida",
            Self::Anterior => "Anterior es requerido",
            Self::Estado => "Estado es requerido",
            Self::Area => "Área es requerida",
            Self::Piso | Self::Lugar | Self::Ter | Self::Ue => self.positive_int_message(),
        }
    }

    fn positive_int_message(self) -> &'static str {
        match self {
            Self::Lugar => "Lugar debe ser un entero positivo",
            Self::Ter => "TER debe ser un entero positivo",
            Self::Ue => "UE debe ser un entero positivo",
            _ => "Piso debe ser un entero positivo",
        }
    }
}

/// Field-local validation messages.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TelefonoDraft {
    pub ip: String,
    pub unidad: String,
    pub usuario: String,
    pub rack: String,
    pub boca: String,
    pub anterior: String,
    pub estado: Option<Estado>,
    pub piso: String,
    pub area: String,
    pub lugar: String,
    pub ter: String,
    pub ue: String,
}

impl TelefonoDraft {
    /// Current text of `field`. `estado` reads as its wire value or empty.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Ip => &self.ip,
            Field::Unidad => &self.unidad,
            Field::Usuario => &self.usuario,
            Field::Rack => &self.rack,
            Field::Boca => &self.boca,
            Field::Anterior => &self.anterior,
            Field::Estado => self.estado.map_or("", Estado::as_str),
            Field::Piso => &self.piso,
            Field::Area => &self.area,
            Field::Lugar => &self.lugar,
            Field::Ter => &self.ter,
            Field::Ue => &self.ue,
        }
    }

    /// Store typed text for `field`. For `estado`, unknown values unset it.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Ip => self.ip = value,
            Field::Unidad => self.unidad = value,
            Field::Usuario => self.usuario = value,
            Field::Rack => self.rack = value,
            Field::Boca => self.boca = value,
            Field::Anterior => self.anterior = value,
            Field::Estado => self.estado = Estado::from_wire(value.trim()),
            Field::Piso => self.piso = value,
            Field::Area => self.area = value,
            Field::Lugar => self.lugar = value,
            Field::Ter => self.ter = value,
            Field::Ue => self.ue = value,
        }
    }
}

fn required_text(draft: &TelefonoDraft, field: Field, errors: &mut FieldErrors) -> String {
    let value = draft.get(field).trim();
    if value.is_empty() {
        errors.insert(field, field.required_message());
    }
    value.to_owned()
}

fn positive_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

fn required_int(draft: &TelefonoDraft, field: Field, errors: &mut FieldErrors) -> i64 {
    positive_int(draft.get(field)).unwrap_or_else(|| {
        errors.insert(field, field.positive_int_message());
        0
    })
}

fn optional_int(draft: &TelefonoDraft, field: Field, errors: &mut FieldErrors) -> Option<i64> {
    let raw = draft.get(field).trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = positive_int(raw);
    if parsed.is_none() {
        errors.insert(field, field.positive_int_message());
    }
    parsed
}

/// Validate every field and build the creation payload.
///
/// # Errors
///
/// Returns the message for each invalid field.
pub fn validate(draft: &TelefonoDraft) -> Result<NewTelefono, FieldErrors> {
    let mut errors = FieldErrors::new();

    let ip = required_text(draft, Field::Ip, &mut errors);
    let unidad = required_text(draft, Field::Unidad, &mut errors);
    let usuario = required_text(draft, Field::Usuario, &mut errors);
    let rack = required_text(draft, Field::Rack, &mut errors);
    let boca = required_text(draft, Field::Boca, &mut errors);
    let anterior = required_text(draft, Field::Anterior, &mut errors);
    if draft.estado.is_none() {
        errors.insert(Field::Estado, Field::Estado.required_message());
    }
    let piso = required_int(draft, Field::Piso, &mut errors);
    let area = required_text(draft, Field::Area, &mut errors);
    let lugar = optional_int(draft, Field::Lugar, &mut errors);
    let ter = optional_int(draft, Field::Ter, &mut errors);
    let ue = optional_int(draft, Field::Ue, &mut errors);

    match draft.estado {
        Some(estado) if errors.is_empty() => Ok(NewTelefono {
            ip,
            unidad,
            usuario,
            rack,
            boca,
            anterior,
            estado,
            piso,
            area,
            internos: NestedCreate { create: InternoInput { lugar, ter, ue } },
        }),
        _ => Err(errors),
    }
}

/// Wizard progress plus the errors currently on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    pub step: Step,
    pub draft: TelefonoDraft,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl WizardState {
    pub fn next(&mut self) {
        self.step = Step::Two;
    }

    pub fn back(&mut self) {
        self.step = Step::One;
    }

    /// Update a field and drop its stale error.
    pub fn set(&mut self, field: Field, value: String) {
        self.draft.set(field, value);
        self.errors.remove(&field);
    }

    /// Pick the estado from the select; `None` is the placeholder option.
    pub fn set_estado(&mut self, estado: Option<Estado>) {
        self.draft.estado = estado;
        self.errors.remove(&Field::Estado);
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Errors for the fields of `step` only.
    #[must_use]
    pub fn validate_step(&self, step: Step) -> FieldErrors {
        match validate(&self.draft) {
            Ok(_) => FieldErrors::new(),
            Err(mut errors) => {
                errors.retain(|field, _| field.step() == step);
                errors
            }
        }
    }

    /// Validate the whole draft. On success the payload is returned and the
    /// wizard is marked as submitting; on failure the errors are stored.
    pub fn submit(&mut self) -> Option<NewTelefono> {
        if self.submitting {
            return None;
        }
        match validate(&self.draft) {
            Ok(payload) => {
                self.errors.clear();
                self.submitting = true;
                Some(payload)
            }
            Err(errors) => {
                // Step-one problems come first so they are seen before step two.
                self.step = if self.validate_step(Step::One).is_empty() { Step::Two } else { Step::One };
                self.errors = errors;
                None
            }
        }
    }

    /// The request finished; re-enable the submit button.
    pub fn finish(&mut self) {
        self.submitting = false;
    }
}
