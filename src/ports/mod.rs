/// Ports module defining interfaces for hexagonal architecture
///
/// The core drives everything it needs from the outside world (the
/// cluster, the console, the file system) through the outbound ports.
pub mod outbound;
