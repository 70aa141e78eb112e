#![no_std]

mod admins;
mod events;
mod ledger;
mod lifecycle;
mod payments;
mod registry;
mod storage;
mod storage_types;
mod utils;
mod withdrawal;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use storage_types::{
    AdminSlot, ApprovalEviction, Campaign, CampaignId, CampaignState, ContributionRecord, Error,
    GovernancePolicy, RankingBasis, MAX_ADMINS, QUORUM,
};

/// Crowdfunding campaigns whose top contributors govern withdrawals.
///
/// Every entry point assumes it runs to completion before the next one
/// starts, which the Soroban host guarantees. Nothing here locks.
#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the registry with its admin, the token campaigns are funded
    /// in, and the governance policy given to new campaigns.
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        default_policy: GovernancePolicy,
    ) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        storage::set_config(&env, &admin, &token);
        storage::set_default_policy(&env, &default_policy);
        storage::set_campaign_count(&env, 0);

        Ok(())
    }

    /// Change the policy applied to campaigns created from now on.
    pub fn set_default_policy(env: Env, policy: GovernancePolicy) -> Result<(), Error> {
        let admin = storage::get_admin(&env)?;
        admin.require_auth();

        storage::set_default_policy(&env, &policy);
        Ok(())
    }

    pub fn get_default_policy(env: Env) -> Result<GovernancePolicy, Error> {
        storage::get_default_policy(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        storage::get_token(&env)
    }

    /// Create a campaign with an absolute deadline (ledger timestamp).
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        deadline: u64,
        goal_amount: i128,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();
        registry::create_campaign(&env, creator, title, description, deadline, goal_amount)
    }

    /// Create a campaign that runs for `duration_days` from now.
    pub fn start_project(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        duration_days: u32,
        goal_amount: i128,
    ) -> Result<CampaignId, Error> {
        creator.require_auth();
        registry::start_project(&env, creator, title, description, duration_days, goal_amount)
    }

    pub fn return_all_projects(env: Env) -> Vec<CampaignId> {
        registry::list_campaigns(&env)
    }

    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    /// Contribute `amount` of the token and return the campaign's new balance.
    pub fn contribute(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        contributor.require_auth();
        ledger::contribute(&env, campaign_id, &contributor, amount)
    }

    /// Admins in slot order, which is not contribution order.
    pub fn get_admins(env: Env, campaign_id: CampaignId) -> Result<Vec<Address>, Error> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(admins::admins(&storage::load_roster(&env, campaign_id)))
    }

    pub fn get_admin_slots(env: Env, campaign_id: CampaignId) -> Result<Vec<AdminSlot>, Error> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::load_roster(&env, campaign_id))
    }

    pub fn is_admin(env: Env, campaign_id: CampaignId, who: Address) -> Result<bool, Error> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(admins::is_admin(&storage::load_roster(&env, campaign_id), &who))
    }

    pub fn approve_withdrawal(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        withdrawal::approve(&env, campaign_id, &caller)
    }

    /// Approvers of the current cycle, in the order they approved.
    pub fn get_accepted_requests(
        env: Env,
        campaign_id: CampaignId,
    ) -> Result<Vec<Address>, Error> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::load_approvals(&env, campaign_id))
    }

    pub fn reset_approvals(
        env: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        withdrawal::reset_approvals(&env, campaign_id, &caller)
    }

    /// Send the campaign balance to its creator. Needs a successful campaign
    /// and a quorum of admin approvals.
    pub fn withdraw(env: Env, campaign_id: CampaignId, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        withdrawal::withdraw(&env, campaign_id, &caller)
    }

    pub fn current_balance(env: Env, campaign_id: CampaignId) -> Result<i128, Error> {
        Ok(storage::load_campaign(&env, campaign_id)?.current_balance)
    }

    pub fn state(env: Env, campaign_id: CampaignId) -> Result<CampaignState, Error> {
        Ok(storage::load_campaign(&env, campaign_id)?.state)
    }

    pub fn creator(env: Env, campaign_id: CampaignId) -> Result<Address, Error> {
        Ok(storage::load_campaign(&env, campaign_id)?.creator)
    }

    pub fn get_contribution(
        env: Env,
        campaign_id: CampaignId,
        sequence: u32,
    ) -> Result<Option<ContributionRecord>, Error> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::get_contribution(&env, campaign_id, sequence))
    }

    pub fn get_contributed_total(
        env: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, Error> {
        storage::load_campaign(&env, campaign_id)?;
        Ok(storage::get_contributor_total(&env, campaign_id, &contributor))
    }
}
