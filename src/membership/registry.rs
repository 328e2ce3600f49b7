use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use super::types::{Member, MembershipError};

type Result<T> = std::result::Result<T, MembershipError>;

/// Record plus its insertion sequence, used to keep listing order stable.
#[derive(Debug, Clone)]
struct StoredMember {
    seq: u64,
    member: Member,
}

/// In-memory membership store keyed by email.
///
/// Shared between handlers behind an `Arc`. Registration goes through the
/// map's entry API, so the uniqueness check and the insert hold the same
/// shard lock.
#[derive(Debug, Default)]
pub struct MembershipRegistry {
    members: DashMap<String, StoredMember>,
    next_seq: AtomicU64,
}

impl MembershipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, name: String, email: String, start_date: String) -> Result<Member> {
        if name.is_empty() || email.is_empty() || start_date.is_empty() {
            return Err(MembershipError::FieldsRequired);
        }

        match self.members.entry(email) {
            Entry::Occupied(_) => Err(MembershipError::Duplicate),
            Entry::Vacant(slot) => {
                let member = Member::new(name, slot.key().clone(), start_date);
                let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
                slot.insert(StoredMember {
                    seq,
                    member: member.clone(),
                });
                tracing::info!("Registered membership for {}", member.email);
                Ok(member)
            }
        }
    }

    pub fn get_by_email(&self, email: &str) -> Result<Member> {
        match self.members.get(email) {
            Some(stored) => Ok(stored.member.clone()),
            None => {
                tracing::debug!("No membership for {}", email);
                Err(MembershipError::NotFound)
            }
        }
    }

    /// Active members in registration order.
    pub fn list_active(&self) -> Vec<Member> {
        let mut active: Vec<(u64, Member)> = self
            .members
            .iter()
            .filter(|entry| entry.member.is_active)
            .map(|entry| (entry.seq, entry.member.clone()))
            .collect();

        active.sort_by_key(|(seq, _)| *seq);
        active.into_iter().map(|(_, member)| member).collect()
    }

    pub fn update_start_date(&self, email: &str, new_start_date: String) -> Result<Member> {
        if new_start_date.is_empty() {
            return Err(MembershipError::StartDateRequired);
        }

        let mut stored = self
            .members
            .get_mut(email)
            .ok_or(MembershipError::NotFound)?;
        stored.member.start_date = new_start_date;

        tracing::info!(
            "Updated start date for {} to {}",
            email,
            stored.member.start_date
        );
        Ok(stored.member.clone())
    }

    /// Marks the membership inactive. Cancelling twice is not an error.
    pub fn cancel(&self, email: &str) -> Result<Member> {
        let mut stored = self
            .members
            .get_mut(email)
            .ok_or(MembershipError::NotFound)?;
        stored.member.is_active = false;

        tracing::info!("Cancelled membership for {}", email);
        Ok(stored.member.clone())
    }

    /// Total number of records, cancelled ones included.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
