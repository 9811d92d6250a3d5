// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 按空白切分统计单词数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
