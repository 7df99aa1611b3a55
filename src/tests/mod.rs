// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
pub mod request_tests;
pub mod rolling_tests;
