// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to perform one creation request against
// the DigitalOcean Functions Challenge API and report the result.
//
// Module responsibilities:
// - `cli`: Command-line arguments and the fixed set of Sammy categories.
// - `api`: Encapsulates the HTTP interaction with the challenge endpoint
//   (request payload, headers, the single blocking POST).
// - `outcome`: Classifies the service reply as success or failure and
//   emits the user-visible message(s).
pub mod api;
pub mod cli;
pub mod outcome;
