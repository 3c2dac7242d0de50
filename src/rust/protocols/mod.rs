// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod layer2;
