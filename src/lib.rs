// Widget core (always compiled, toolkit independent)
pub mod upload;

// Browser widget (only compiled with csr feature)
#[cfg(feature = "csr")]
pub mod ui;

// Static host for the WASM bundle (only compiled with server feature)
#[cfg(feature = "server")]
pub mod host;
