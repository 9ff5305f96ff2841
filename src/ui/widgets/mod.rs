// src/ui/widgets/mod.rs

// Declare all of our widget modules here.
pub mod footer; // The dynamic footer bar.
pub mod form; // The scan form (domain + email fields).
pub mod log_view; // The operator log panel.
pub mod notice_popup; // Blocking alert-style notices.
pub mod results; // The per-category finding rows.
pub mod summary; // The score card, risk meter and grant helper.
