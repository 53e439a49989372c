mod registry_tests;
mod sweeper_tests;
