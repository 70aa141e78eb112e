use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal_amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub new_balance: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct AdminChangedEvent {
    pub campaign_id: CampaignId,
    pub slot: u32,
    pub admin: Address,
    pub evicted: Option<Address>,
}

#[contracttype]
#[derive(Clone)]
pub struct GoalReachedEvent {
    pub campaign_id: CampaignId,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawalApprovedEvent {
    pub campaign_id: CampaignId,
    pub admin: Address,
    pub approvals: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct ApprovalsResetEvent {
    pub campaign_id: CampaignId,
    pub cleared: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct WithdrawnEvent {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"), event.campaign_id),
        event,
    );
}

pub fn emit_contributed(env: &Env, event: ContributedEvent) {
    env.events()
        .publish((Symbol::new(env, "contributed"), event.campaign_id), event);
}

pub fn emit_admin_changed(env: &Env, event: AdminChangedEvent) {
    env.events()
        .publish((Symbol::new(env, "admin_changed"), event.campaign_id), event);
}

pub fn emit_goal_reached(env: &Env, event: GoalReachedEvent) {
    env.events()
        .publish((Symbol::new(env, "goal_reached"), event.campaign_id), event);
}

pub fn emit_withdrawal_approved(env: &Env, event: WithdrawalApprovedEvent) {
    env.events().publish(
        (Symbol::new(env, "withdrawal_approved"), event.campaign_id),
        event,
    );
}

pub fn emit_approvals_reset(env: &Env, event: ApprovalsResetEvent) {
    env.events()
        .publish((Symbol::new(env, "approvals_reset"), event.campaign_id), event);
}

pub fn emit_withdrawn(env: &Env, event: WithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "withdrawn"), event.campaign_id), event);
}
