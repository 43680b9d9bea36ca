pub mod backup_control;
pub mod backup_list;
pub mod progress_bar;
pub mod size_chart;
pub mod status_card;
pub mod storage_card;
pub mod summary_cards;

pub use backup_control::BackupControl;
pub use backup_list::BackupList;
pub use progress_bar::ProgressBar;
pub use size_chart::SizeChart;
pub use status_card::StatusCard;
pub use storage_card::StorageCard;
pub use summary_cards::SummaryCards;
