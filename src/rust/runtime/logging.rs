// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::flexi_logger::{
    Logger,
    LoggerHandle,
};
use ::std::sync::{
    Mutex,
    Once,
};

//======================================================================================================================
// Constants
//======================================================================================================================

/// Log specification used when `RUST_LOG` is not set.
const DEFAULT_LOG_SPEC: &str = "info";

//======================================================================================================================
// Static Variables
//======================================================================================================================

/// Guardian to the logging initialize function.
static INIT_LOG: Once = Once::new();

/// Handle to the installed logger. Dropping it would shut the logger down.
static LOG_HANDLE: Mutex<Option<LoggerHandle>> = Mutex::new(None);

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Initializes logging features.
pub fn initialize() {
    INIT_LOG.call_once(|| {
        // Log specification is taken from the RUST_LOG environment variable.
        match Logger::try_with_env_or_str(DEFAULT_LOG_SPEC).and_then(|logger| logger.start()) {
            Ok(handle) => {
                if let Ok(mut slot) = LOG_HANDLE.lock() {
                    *slot = Some(handle);
                }
            },
            // Some other logger is already installed.
            Err(e) => eprintln!("initialize(): failed to start logger ({})", e),
        }
    });
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
