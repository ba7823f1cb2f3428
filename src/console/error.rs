//! Console error types

/// Fatal console failures
#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),
    #[error("input ended before the session finished")]
    EndOfInput,
}

/// Rejected input. Shown to the user, who is asked again.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Noto'g'ri tanlov! Qayta urinib ko'ring.")]
    InvalidMenuSelection(String),
    #[error("Iltimos, yoshingizni butun son bilan kiriting.")]
    InvalidNumber(String),
    #[error("'{0}' foydalanuvchi nomi band. Boshqasini tanlang.")]
    DuplicateUsername(String),
    #[error("Foydalanuvchi nomi bo'sh bo'lmasligi kerak.")]
    EmptyUsername,
}
