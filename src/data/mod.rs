/// Data layer: file discovery, workbook loading and the table types.
///
/// Architecture:
/// ```text
///  data/news_hackingx_*.xlsx        data/hacking.xlsx
///        │                                 │
///        ▼                                 │
///   ┌──────────┐                           │
///   │ discover  │  glob + year from name   │
///   └──────────┘                           │
///        │                                 ▼
///        ▼                          ┌──────────────┐
///   ┌──────────┐                    │ IncidentSchema│  fixed rows / year columns
///   │  loader   │ ◄─────────────────└──────────────┘
///   └──────────┘
///        │
///        ▼
///   BTreeMap<year, NewsYearTable>  +  Option<IncidentTable>
/// ```

pub mod discover;
pub mod loader;
pub mod model;
