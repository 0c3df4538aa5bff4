pub mod errors;
pub mod constants;
pub mod i18n;

// Structured logging helpers (tracing core compiles for WASM too)
pub mod logging;

// Available in fullstack mode (both client and server)
pub mod hooks;
