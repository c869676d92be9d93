use quiz_core::model::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LevelUnavailable(Level),
    NoActiveQuestion,
    NoLevelSelected,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ViewError::LevelUnavailable(level) => format!("{level} seviyesi yüklenemedi."),
            ViewError::NoActiveQuestion => "Bir şeyler ters gitti. Lütfen tekrar deneyin.".to_string(),
            ViewError::NoLevelSelected => "Önce bir seviye seçin.".to_string(),
        }
    }
}
