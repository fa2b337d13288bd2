//! 编辑距离
//!
//! 两行滚动数组实现的 Levenshtein 距离（插入/删除/替换代价均为 1）

/// 计算两个词的 Levenshtein 距离
///
/// 按字符（非字节）比较，区分大小写。任一侧为空时返回另一侧的长度。
pub fn levenshtein(s: &str, t: &str) -> usize {
    if s.is_empty() {
        return t.chars().count();
    }
    if t.is_empty() {
        return s.chars().count();
    }
    if s == t {
        return 0;
    }

    let s: Vec<char> = s.chars().collect();
    let t: Vec<char> = t.chars().collect();

    // v0: 上一行，v1: 当前行
    let mut v0: Vec<usize> = (0..=t.len()).collect();
    let mut v1: Vec<usize> = vec![0; t.len() + 1];

    for (i, sc) in s.iter().enumerate() {
        v1[0] = i + 1;

        for (j, tc) in t.iter().enumerate() {
            let cost = usize::from(sc != tc);
            let deletion = v0[j + 1] + 1;
            let insertion = v1[j] + 1;
            let substitution = v0[j] + cost;
            v1[j + 1] = deletion.min(insertion).min(substitution);
        }

        std::mem::swap(&mut v0, &mut v1);
    }

    // 最后一次 swap 后结果位于 v0
    v0[t.len()]
}
