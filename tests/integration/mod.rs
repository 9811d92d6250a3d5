// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod form_test;
pub mod helpers;
pub mod huggingface_summarizer_test;
