//! Contribution-ranked admin roster.
//!
//! The roster is a fixed set of at most [`MAX_ADMINS`] slots. Once full, a new
//! candidate only gets in by beating the smallest ranking amount, and takes
//! over that exact slot. Slots are never re-sorted, so slot order is not
//! contribution order.

use soroban_sdk::{Address, Vec};

use crate::storage_types::{AdminSlot, ApprovalEviction, Error, RankingBasis, MAX_ADMINS};

/// Outcome of offering a contribution to the roster.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RosterChange {
    Unchanged,
    /// The contributor already held this slot; its ranking amount was updated.
    Refreshed(u32),
    Appended(u32),
    /// Slot index and the admin who lost it.
    Replaced(u32, Address),
}

/// Amount a contribution competes with, per the campaign's ranking basis.
pub fn ranking_amount(basis: RankingBasis, contribution: i128, lifetime_total: i128) -> i128 {
    match basis {
        RankingBasis::LatestContribution => contribution,
        RankingBasis::CumulativeTotal => lifetime_total,
    }
}

pub fn position_of(roster: &Vec<AdminSlot>, who: &Address) -> Option<u32> {
    for (i, slot) in roster.iter().enumerate() {
        if slot.admin == *who {
            return Some(i as u32);
        }
    }
    None
}

pub fn is_admin(roster: &Vec<AdminSlot>, who: &Address) -> bool {
    position_of(roster, who).is_some()
}

pub fn admins(roster: &Vec<AdminSlot>) -> Vec<Address> {
    let mut out = Vec::new(roster.env());
    for slot in roster.iter() {
        out.push_back(slot.admin);
    }
    out
}

/// First slot holding the strictly smallest ranking amount.
pub fn min_slot(roster: &Vec<AdminSlot>) -> Option<(u32, i128)> {
    let mut min: Option<(u32, i128)> = None;
    for (i, slot) in roster.iter().enumerate() {
        match min {
            Some((_, current)) if slot.amount >= current => {}
            _ => min = Some((i as u32, slot.amount)),
        }
    }
    min
}

/// Offer `candidate` ranked at `amount` to the roster, mutating it in place.
pub fn consider(roster: &mut Vec<AdminSlot>, candidate: &Address, amount: i128) -> RosterChange {
    let slot = AdminSlot {
        admin: candidate.clone(),
        amount,
    };

    if let Some(i) = position_of(roster, candidate) {
        roster.set(i, slot);
        return RosterChange::Refreshed(i);
    }

    if roster.len() < MAX_ADMINS {
        roster.push_back(slot);
        return RosterChange::Appended(roster.len() - 1);
    }

    match min_slot(roster) {
        Some((i, min)) if amount > min => {
            let evicted = roster.get_unchecked(i).admin;
            roster.set(i, slot);
            RosterChange::Replaced(i, evicted)
        }
        _ => RosterChange::Unchanged,
    }
}

/// Append `caller` to the approval log unless it is already there.
pub fn record_approval(approvals: &mut Vec<Address>, caller: &Address) -> Result<(), Error> {
    if approvals.contains(caller) {
        return Err(Error::AlreadyApproved);
    }
    approvals.push_back(caller.clone());
    Ok(())
}

/// Apply the eviction policy to an admin who just lost their slot.
/// Returns true if an approval was dropped from the log.
pub fn handle_eviction(
    approvals: &mut Vec<Address>,
    evicted: &Address,
    policy: ApprovalEviction,
) -> bool {
    if policy == ApprovalEviction::KeepApproval {
        return false;
    }
    match approvals.first_index_of(evicted) {
        Some(i) => {
            approvals.remove(i);
            true
        }
        None => false,
    }
}
