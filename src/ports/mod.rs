/// Ports module defining interfaces for hexagonal architecture
///
/// The application core only talks to the outside world through these
/// outbound (driven) ports.
pub mod outbound;
