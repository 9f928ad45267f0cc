//! Form controls and small building blocks shared by the pages.

mod alert;
pub use alert::{Alert, AlertKind};

mod button;
pub use button::{Button, ButtonVariant};

mod field;
pub use field::{Checkbox, FieldError, TextArea, TextField};

mod spinner;
pub use spinner::Spinner;
