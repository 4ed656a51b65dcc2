use std::io::{self, Write};

/// Fixed help shown when the wrapper is started without arguments
pub const USAGE: &str = "\
用法: ./pdf2svg.sh <pdf文件> [选项]

选项:
  -o <目录>        指定输出目录
  --merge          合并所有页面为单个SVG文件
  --interactive    添加交互特性

示例:
  ./pdf2svg.sh input.pdf
  ./pdf2svg.sh input.pdf -o output/
  ./pdf2svg.sh input.pdf --merge --interactive
";

pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(USAGE.as_bytes())?;
    out.flush()
}

/// Print the usage text on stdout
pub fn print_usage() -> io::Result<()> {
    write_usage(&mut io::stdout().lock())
}
