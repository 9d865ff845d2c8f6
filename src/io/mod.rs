mod format;
mod load;

pub use format::DocumentFormat;
pub use load::{
    FieldDocument, field_config_from_str, field_document_from_str, load_field_document,
    parse_document_str,
};
