use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// The `name`/`id` attribute of the input.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FormField::Email => InputKind::Email,
            FormField::Message => InputKind::TextArea,
            FormField::Name | FormField::Subject => InputKind::Text,
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            FormField::Name => "Name must be at least 2 characters",
            FormField::Email => "Please enter a valid email address",
            FormField::Subject => "Subject must be at least 3 characters",
            FormField::Message => "Message must be at least 10 characters",
        }
    }

    /// Field rule. Surrounding whitespace is ignored.
    pub fn rule(&self, value: &str) -> bool {
        let trimmed = value.trim();
        match self {
            FormField::Name => trimmed.chars().count() >= 2,
            FormField::Email => EMAIL_RE.is_match(trimmed),
            FormField::Subject => trimmed.chars().count() >= 3,
            FormField::Message => trimmed.chars().count() >= 10,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldState {
    value: String,
    touched: bool,
    // stays true until the field is first validated
    valid: bool,
}

impl Default for FieldState {
    fn default() -> Self {
        Self {
            value: String::new(),
            touched: false,
            valid: true,
        }
    }
}

/// Values, touched flags and validity of the contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: [FieldState; 4],
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.fields[field.index()].value
    }

    pub fn is_touched(&self, field: FormField) -> bool {
        self.fields[field.index()].touched
    }

    pub fn is_valid(&self, field: FormField) -> bool {
        self.fields[field.index()].valid
    }

    /// Whether the inline error for `field` should be visible.
    pub fn shows_error(&self, field: FormField) -> bool {
        let state = &self.fields[field.index()];
        state.touched && !state.valid
    }

    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let state = &mut self.fields[field.index()];
        state.value = value.into();
        if state.touched {
            state.valid = field.rule(&state.value);
        }
    }

    pub fn mark_touched(&mut self, field: FormField) {
        let state = &mut self.fields[field.index()];
        state.touched = true;
        state.valid = field.rule(&state.value);
    }

    /// Marks every field touched and re-validates it. Returns true if all pass.
    pub fn validate_all(&mut self) -> bool {
        FormField::ALL
            .into_iter()
            .map(|field| {
                self.mark_touched(field);
                self.is_valid(field)
            })
            .fold(true, |acc, valid| acc && valid)
    }

    pub fn is_form_valid(&self) -> bool {
        self.fields
            .iter()
            .all(|state| !state.value.trim().is_empty() && state.valid)
    }

    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| !self.is_valid(*field))
            .collect()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_value(FormField::Name, "Ada Lovelace");
        form.set_value(FormField::Email, "ada@example.com");
        form.set_value(FormField::Subject, "Engines");
        form.set_value(FormField::Message, "Let's talk about the analytical engine.");
        form
    }

    #[test]
    fn test_touch_runs_rule() {
        let cases = [
            (FormField::Name, "A", false),
            (FormField::Name, "Al", true),
            (FormField::Name, "  A  ", false),
            (FormField::Email, "a@b.com", true),
            (FormField::Email, "a@b", false),
            (FormField::Email, "a b@c.com", false),
            (FormField::Email, "a@@b.com", false),
            (FormField::Subject, "Hi", false),
            (FormField::Subject, "Hey", true),
            (FormField::Message, "too short", false),
            (FormField::Message, "long enough", true),
        ];
        for (field, value, expected) in cases {
            let mut form = FormState::new();
            form.set_value(field, value);
            form.mark_touched(field);
            assert_eq!(form.is_valid(field), expected, "{field:?} = {value:?}");
            assert_eq!(form.is_valid(field), field.rule(value));
        }
    }

    #[test]
    fn test_untouched_field_stays_valid() {
        let mut form = FormState::new();
        form.set_value(FormField::Name, "A");

        // Not touched yet, so the stale default is kept
        assert!(form.is_valid(FormField::Name));
        assert!(!form.shows_error(FormField::Name));

        form.mark_touched(FormField::Name);
        assert!(!form.is_valid(FormField::Name));
        assert!(form.shows_error(FormField::Name));

        // Touched fields re-validate on every edit
        form.set_value(FormField::Name, "Al");
        assert!(form.is_valid(FormField::Name));
        assert!(!form.shows_error(FormField::Name));
    }

    #[test]
    fn test_form_validity_per_field() {
        let mut form = filled();
        assert!(form.validate_all());
        assert!(form.is_form_valid());

        let bad_values = [
            (FormField::Name, "A"),
            (FormField::Email, "ada@example"),
            (FormField::Subject, "Yo"),
            (FormField::Message, "Hello!"),
        ];
        for (field, bad) in bad_values {
            let mut form = filled();
            form.validate_all();
            let good = form.value(field).to_string();

            form.set_value(field, bad);
            assert!(!form.is_form_valid(), "{field:?} should invalidate the form");
            assert_eq!(form.invalid_fields(), vec![field]);

            form.set_value(field, good);
            assert!(form.is_form_valid());
        }
    }

    #[test]
    fn test_blank_field_invalidates_form() {
        let mut form = filled();
        form.set_value(FormField::Subject, "   ");
        // Subject untouched: its flag is still true but the value is blank
        assert!(form.is_valid(FormField::Subject));
        assert!(!form.is_form_valid());
    }

    #[test]
    fn test_validate_all_touches_everything() {
        let mut form = FormState::new();
        form.set_value(FormField::Name, "Ada");
        assert!(!form.validate_all());
        for field in FormField::ALL {
            assert!(form.is_touched(field));
        }
        assert_eq!(
            form.invalid_fields(),
            vec![FormField::Email, FormField::Subject, FormField::Message]
        );
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.validate_all();
        form.reset();
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
            assert!(!form.is_touched(field));
            assert!(form.is_valid(field));
        }
    }

    #[test]
    fn test_message_counts_chars() {
        // 10 multi-byte characters
        assert!(FormField::Message.rule("éééééééééé"));
        assert!(!FormField::Name.rule("é"));
    }
}
