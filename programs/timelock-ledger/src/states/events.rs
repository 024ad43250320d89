use anchor_lang::prelude::*;

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct LockedEvent {
    pub user: Pubkey,
    pub lock_id: u64,
    pub amount: u64,
    pub start_time: u64,
    pub end_time: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct LockExtendedEvent {
    pub user: Pubkey,
    pub lock_id: u64,
    pub new_end_time: u64,
}

#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ClaimedEvent {
    pub user: Pubkey,
    pub lock_id: u64,
    pub amount: u64,
    pub claimed_at: u64,
}
