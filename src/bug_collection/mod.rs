/// Domain layer: the FindBugs report model and the services that build it
pub mod domain;
pub mod services;
