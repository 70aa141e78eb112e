use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    DefaultPolicy,
    CampaignCount,
}

// Storage keys for persistent data, all scoped by campaign
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Roster(CampaignId),
    Approvals(CampaignId),
    Contribution(CampaignId, u32),        // (CampaignID, sequence)
    ContributorTotal(CampaignId, Address), // (CampaignID, contributor) -> lifetime total
}

pub type CampaignId = u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CampaignState {
    Fundraising = 0,
    Successful = 1,
    Closed = 2,
}

/// Amount a contributor is ranked by when competing for an admin slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RankingBasis {
    LatestContribution = 0,
    CumulativeTotal = 1,
}

/// What happens to an evicted admin's pending approval.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum ApprovalEviction {
    KeepApproval = 0,
    RevokeApproval = 1,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GovernancePolicy {
    pub ranking: RankingBasis,
    pub eviction: ApprovalEviction,
}

impl Default for GovernancePolicy {
    fn default() -> Self {
        GovernancePolicy {
            ranking: RankingBasis::LatestContribution,
            eviction: ApprovalEviction::KeepApproval,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub deadline: u64,
    pub goal_amount: i128,
    pub current_balance: i128,
    pub total_raised: i128, // never reduced by a withdrawal
    pub contribution_count: u32,
    pub state: CampaignState,
    pub created_at: u64,
    pub policy: GovernancePolicy,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributionRecord {
    pub contributor: Address,
    pub amount: i128,
    pub sequence: u32,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AdminSlot {
    pub admin: Address,
    pub amount: i128, // ranking amount, not necessarily the admin's total
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidState = 4,
    InvalidAmount = 5,
    Unauthorized = 6,
    AlreadyApproved = 7,
    QuorumNotMet = 8,
    TransferFailed = 9,
    InvalidDeadline = 10,
    RegistryFull = 11,
}

// Constants
pub const MAX_ADMINS: u32 = 5;
pub const QUORUM: u32 = MAX_ADMINS / 2 + 1; // strict majority of the roster capacity
pub const SECONDS_PER_DAY: u64 = 86400;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
