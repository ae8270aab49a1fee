//! 命令行输出支持

mod printer;

pub use printer::{AlgorithmReport, OutputFormat, Printer};

/// 解析 `U-V` 或 `U-V:W` 形式的边（省略权重时为 1）
pub fn parse_edge(text: &str) -> crate::Result<(usize, usize, crate::types::Weight)> {
    use crate::error::Error;

    let invalid = || Error::InvalidArgument(format!("无法解析边 '{}'，应为 U-V 或 U-V:W", text));

    let (pair, weight) = match text.split_once(':') {
        Some((pair, w)) => (pair, w.trim().parse().map_err(|_| invalid())?),
        None => (text, crate::types::DEFAULT_WEIGHT),
    };
    let (from, to) = pair.split_once('-').ok_or_else(invalid)?;
    let from = from.trim().parse().map_err(|_| invalid())?;
    let to = to.trim().parse().map_err(|_| invalid())?;

    Ok((from, to, weight))
}
