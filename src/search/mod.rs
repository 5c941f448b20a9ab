pub mod coordinator;

pub use coordinator::{RequestStatus, RequestTicket, SearchCoordinator};
