// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::session::Session;
use shiftwise::Command;
use shiftwise_domain::{Day, SlotRange, TimeSlot, WorkerId};
use shiftwise_persistence::{MemoryStore, Persistence};

pub fn slot(id: &str) -> TimeSlot {
    id.parse().unwrap()
}

pub fn create_empty_session() -> Session<MemoryStore> {
    Session::load(Persistence::new(MemoryStore::new()), SlotRange::DEFAULT)
}

/// A session with Alice (`a`) and Bob (`b`).
pub fn create_test_session() -> Session<MemoryStore> {
    let mut session: Session<MemoryStore> = create_empty_session();
    for (id, name) in [("a", "Alice"), ("b", "Bob")] {
        session
            .execute(Command::AddWorker {
                id: WorkerId::new(id),
                name: name.to_string(),
                color: None,
            })
            .unwrap();
    }
    session
}

/// Every slot of `day` in the default range.
pub fn whole_day(day: Day) -> Vec<(Day, TimeSlot)> {
    SlotRange::DEFAULT
        .slots()
        .into_iter()
        .map(|slot| (day, slot))
        .collect()
}
