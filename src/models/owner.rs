/// The business entity a teleport station earns money for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessOwner {
    pub identification_number: u64,
    pub nickname: String,
}

impl BusinessOwner {
    pub fn new(identification_number: u64, nickname: impl Into<String>) -> Self {
        Self {
            identification_number,
            nickname: nickname.into(),
        }
    }
}
