mod client;

pub use client::RosterApiClient;
