type SequenceNumberInnerType = u16;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SequenceNumber(SequenceNumberInnerType);

impl SequenceNumber {
    pub fn start_value() -> SequenceNumber {
        // Sessions number their probes from 0.
        SequenceNumber(0)
    }

    fn max_value() -> SequenceNumberInnerType {
        SequenceNumberInnerType::MAX
    }

    #[must_use]
    pub fn next(self) -> Self {
        if self.0 == Self::max_value() {
            Self::start_value()
        } else {
            SequenceNumber(self.0 + 1)
        }
    }
}

impl From<SequenceNumber> for SequenceNumberInnerType {
    fn from(value: SequenceNumber) -> Self {
        value.0
    }
}

impl From<SequenceNumberInnerType> for SequenceNumber {
    fn from(value: SequenceNumberInnerType) -> Self {
        SequenceNumber(value)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
