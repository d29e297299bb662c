use uuid::Uuid;

use super::AdminRecord;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl std::str::FromStr for MoveDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(format!("invalid move direction: {}", s)),
        }
    }
}

/// The two writes of an adjacent swap: each row receives the other's
/// ordering value. The writes are independent (not transactional); callers
/// refresh from the store if either fails.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SwapPlan {
    pub moving: (Uuid, i32),
    pub target: (Uuid, i32),
}

/// Plans an adjacent swap within `rows`, which must already be in display
/// order. Moving the first row up or the last row down returns `None`: the
/// operation is a no-op and no writes are issued.
pub fn adjacent_swap_plan<R: AdminRecord>(
    rows: &[R],
    id: Uuid,
    direction: MoveDirection,
    order_of: impl Fn(&R) -> i32,
) -> Option<SwapPlan> {
    let index = rows.iter().position(|r| r.record_id() == id)?;

    let target_index = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => {
            let next = index + 1;
            if next >= rows.len() {
                return None;
            }
            next
        }
    };

    let moving = &rows[index];
    let target = &rows[target_index];

    Some(SwapPlan {
        moving: (moving.record_id(), order_of(target)),
        target: (target.record_id(), order_of(moving)),
    })
}
