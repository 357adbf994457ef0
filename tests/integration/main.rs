//! Integration test modules.

mod onboarding_flow_test;
