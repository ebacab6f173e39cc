//! Writes a demo `data/` directory: yearly news workbooks and `hacking.xlsx`.
//!
//! Usage: `generate_sample [out_dir]` (defaults to `data`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;

const SUBJECTS: [&str; 8] = [
    "공공기관", "대학병원", "쇼핑몰", "가상자산 거래소", "통신사", "지자체", "방산업체", "게임사",
];
const ATTACKS: [&str; 7] = [
    "랜섬웨어", "디도스", "APT", "피싱", "해킹", "악성코드", "크리덴셜 스터핑",
];
const OUTCOMES: [&str; 6] = [
    "공격 발생", "개인정보 유출", "피해 증가", "보안 강화", "수사 착수", "서비스 장애",
];
const PRESS: [&str; 4] = ["보안뉴스", "연합뉴스", "전자신문", "ZDNet Korea"];

const INCIDENT_TYPES: [&str; 3] = ["홈페이지 변조", "악성코드 유포", "DDoS 공격"];

/// Seeded splitmix64 stream, so every run writes the same workbooks.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

/// `1234567` → `"1,234,567"`.
fn with_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn write_news(path: &Path, year: u16, articles: usize, rng: &mut SampleRng) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in ["날짜", "제목", "언론사"].into_iter().enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }

    for i in 0..articles {
        let row = i as u32 + 1;
        let date = format!(
            "{year}-{:02}-{:02}",
            rng.below(12) + 1,
            rng.below(28) + 1
        );
        let title = format!(
            "{} {} {}",
            rng.pick(&SUBJECTS),
            rng.pick(&ATTACKS),
            rng.pick(&OUTCOMES)
        );
        sheet.write_string(row, 0, date)?;
        sheet.write_string(row, 1, title)?;
        sheet.write_string(row, 2, rng.pick(&PRESS))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

/// Header, a total row, a subtotal row, then one row per incident type.
fn write_summary(path: &Path, rng: &mut SampleRng) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    sheet.write_string(0, 0, "구분")?;
    for (i, year) in (2015..=2024u16).enumerate() {
        sheet.write_string(0, i as u16 + 1, format!("{year}년"))?;
    }

    let counts: Vec<Vec<u64>> = INCIDENT_TYPES
        .iter()
        .map(|_| (0..10).map(|_| 500 + rng.below(4500)).collect())
        .collect();

    let totals: Vec<u64> = (0..10).map(|y| counts.iter().map(|c| c[y]).sum()).collect();
    sheet.write_string(1, 0, "합계")?;
    sheet.write_string(2, 0, "주요 유형")?;
    for (y, total) in totals.iter().enumerate() {
        sheet.write_string(1, y as u16 + 1, with_thousands(*total))?;
    }

    for (r, (label, row)) in INCIDENT_TYPES.iter().zip(&counts).enumerate() {
        let sheet_row = r as u32 + 3;
        sheet.write_string(sheet_row, 0, *label)?;
        for (y, count) in row.iter().enumerate() {
            sheet.write_string(sheet_row, y as u16 + 1, with_thousands(*count))?;
        }
    }

    workbook
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SampleRng(42);

    let mut written = 0;
    for year in 2020..=2024u16 {
        let articles = 40 + rng.below(160) as usize;
        let path = out_dir.join(format!("news_hackingx_{year}.xlsx"));
        write_news(&path, year, articles, &mut rng)?;
        println!("Wrote {articles} articles to {}", path.display());
        written += 1;
    }

    let summary = out_dir.join("hacking.xlsx");
    write_summary(&summary, &mut rng)?;
    println!(
        "Wrote {written} news workbooks and {} to {}",
        summary.display(),
        out_dir.display()
    );
    Ok(())
}
