pub mod dependency_service;
