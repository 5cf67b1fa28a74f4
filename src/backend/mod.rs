//! Concrete document backends.
//!
//! The replacement core only knows the traits in [`crate::replacer`];
//! this module hosts implementations of them. The PDFium-backed one is
//! behind the `pdfium` feature because it needs the pdfium dynamic
//! library at runtime.

#[cfg(feature = "pdfium")]
pub mod pdfium;
