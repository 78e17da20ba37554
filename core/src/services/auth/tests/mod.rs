//! Auth service test suite.
