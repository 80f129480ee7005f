//! Report production: ordering, serialization, and publishing

pub mod publisher;
pub mod render;
pub mod sort;

pub use publisher::Publisher;

/// Path of a report artifact inside the target repository.
pub fn report_path(slug: &str, extension: &str) -> String {
    format!("reports/{slug}-invitations.{extension}")
}
