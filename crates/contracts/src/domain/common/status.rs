use serde::{Deserialize, Serialize};

/// Record status flag, stored by the backend as an integer (1 = active).
///
/// Unknown values deserialize as `Inactive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Status {
    Inactive,
    Active,
}

impl Status {
    pub fn is_active(self) -> bool {
        matches!(self, Status::Active)
    }

    pub fn toggled(self) -> Self {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

impl From<i32> for Status {
    fn from(v: i32) -> Self {
        if v == 1 {
            Status::Active
        } else {
            Status::Inactive
        }
    }
}

impl From<bool> for Status {
    fn from(active: bool) -> Self {
        if active {
            Status::Active
        } else {
            Status::Inactive
        }
    }
}

impl From<Status> for i32 {
    fn from(s: Status) -> Self {
        match s {
            Status::Active => 1,
            Status::Inactive => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Status::Inactive).unwrap(), "0");
        assert_eq!(serde_json::from_str::<Status>("1").unwrap(), Status::Active);
        assert_eq!(serde_json::from_str::<Status>("0").unwrap(), Status::Inactive);
        // Anything unknown is treated as inactive
        assert_eq!(serde_json::from_str::<Status>("7").unwrap(), Status::Inactive);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Status::Active.toggled(), Status::Inactive);
        assert_eq!(Status::Inactive.toggled(), Status::Active);
    }
}
