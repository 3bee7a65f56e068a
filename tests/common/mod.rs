//! Shared helpers for integration tests: attendance sheets as cell grids and
//! as minimal `.xlsx` workbooks.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use attendance_engine::models::RawCell;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// A fixture cell.
#[derive(Debug, Clone, Copy)]
pub enum Cell {
    Text(&'static str),
    Num(f64),
    Blank,
}

impl Cell {
    fn to_raw(self) -> RawCell {
        match self {
            Cell::Text(s) => RawCell::from(s),
            Cell::Num(n) => RawCell::Number(n),
            Cell::Blank => RawCell::Empty,
        }
    }
}

/// One data row of the export.
pub struct Day {
    pub date: &'static str,
    pub duty: Cell,
    pub times: Cell,
    pub status: Cell,
    pub standard: Cell,
    pub actual: Cell,
    pub first: Cell,
    pub last: Cell,
}

impl Day {
    pub fn new(date: &'static str, duty: &'static str, actual: Cell) -> Self {
        Self {
            date,
            duty: Cell::Text(duty),
            times: Cell::Num(2.0),
            status: Cell::Text("正常"),
            standard: Cell::Blank,
            actual,
            first: Cell::Blank,
            last: Cell::Blank,
        }
    }

    pub fn with_clock(mut self, first: &'static str, last: &'static str) -> Self {
        self.first = Cell::Text(first);
        self.last = Cell::Text(last);
        self
    }

    pub fn with_status(mut self, status: &'static str) -> Self {
        self.status = Cell::Text(status);
        self
    }

    pub fn with_times(mut self, times: f64) -> Self {
        self.times = Cell::Num(times);
        self
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.date),
            self.duty,
            self.times,
            self.status,
            self.standard,
            self.actual,
            self.first,
            self.last,
        ]
    }
}

/// Title, export time, group labels and sub-labels, followed by the days.
pub fn sheet_rows(days: &[Day]) -> Vec<Vec<Cell>> {
    let mut rows = vec![
        vec![Cell::Text("每日统计")],
        vec![Cell::Text("导出时间：2024-02-01 10:00")],
        vec![
            Cell::Text("时间"),
            Cell::Text("汇总"),
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
            Cell::Blank,
        ],
        vec![
            Cell::Blank,
            Cell::Text("班次"),
            Cell::Text("打卡次数(次)"),
            Cell::Text("校准状态"),
            Cell::Text("标准工作时长(小时)"),
            Cell::Text("实际工作时长(小时)"),
            Cell::Text("最早打卡时间"),
            Cell::Text("最晚打卡时间"),
        ],
    ];
    rows.extend(days.iter().map(Day::cells));
    rows
}

/// Converts fixture rows into the engine's raw grid.
pub fn grid(rows: &[Vec<Cell>]) -> Vec<Vec<RawCell>> {
    rows.iter()
        .map(|r| r.iter().map(|c| c.to_raw()).collect())
        .collect()
}

fn column_name(index: usize) -> String {
    let mut name = String::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        name.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    name
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn sheet_xml(rows: &[Vec<Cell>], first_row: usize) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    for (i, row) in rows.iter().enumerate() {
        let r = first_row + i + 1;
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .filter_map(|(c, cell)| {
                let reference = format!("{}{}", column_name(c), r);
                match cell {
                    Cell::Text(s) => Some(format!(
                        r#"<c r="{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                        reference,
                        escape(s)
                    )),
                    Cell::Num(n) => Some(format!(r#"<c r="{}"><v>{}</v></c>"#, reference, n)),
                    Cell::Blank => None,
                }
            })
            .collect();
        if !cells.is_empty() {
            xml.push_str(&format!(r#"<row r="{}">{}</row>"#, r, cells.concat()));
        }
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Builds a single-sheet `.xlsx` workbook whose first fixture row lands on
/// sheet row `first_row` (zero-based).
pub fn xlsx_at(rows: &[Vec<Cell>], first_row: usize) -> Vec<u8> {
    let files: [(&str, String); 5] = [
        (
            "[Content_Types].xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#.to_string(),
        ),
        (
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#.to_string(),
        ),
        (
            "xl/workbook.xml",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#.to_string(),
        ),
        (
            "xl/_rels/workbook.xml.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#.to_string(),
        ),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows, first_row)),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in files {
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Builds a single-sheet `.xlsx` workbook starting at `A1`.
pub fn xlsx(rows: &[Vec<Cell>]) -> Vec<u8> {
    xlsx_at(rows, 0)
}

/// Percent-encodes a query parameter value.
pub fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}
