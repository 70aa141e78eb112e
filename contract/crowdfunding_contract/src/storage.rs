use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{
    AdminSlot, Campaign, CampaignId, ContributionRecord, DataKey, Error, GovernancePolicy,
    PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn set_config(e: &Env, admin: &Address, token: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Token, token);
    extend_instance(e);
}

pub fn get_admin(e: &Env) -> Result<Address, Error> {
    e.storage().instance().get(&DataKey::Admin).ok_or(Error::NotInitialized)
}

pub fn get_token(e: &Env) -> Result<Address, Error> {
    e.storage().instance().get(&DataKey::Token).ok_or(Error::NotInitialized)
}

pub fn get_default_policy(e: &Env) -> Result<GovernancePolicy, Error> {
    e.storage()
        .instance()
        .get(&DataKey::DefaultPolicy)
        .ok_or(Error::NotInitialized)
}

pub fn set_default_policy(e: &Env, policy: &GovernancePolicy) {
    e.storage().instance().set(&DataKey::DefaultPolicy, policy);
    extend_instance(e);
}

pub fn get_campaign_count(e: &Env) -> u32 {
    e.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0)
}

pub fn set_campaign_count(e: &Env, count: u32) {
    e.storage().instance().set(&DataKey::CampaignCount, &count);
    extend_instance(e);
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, Error> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(Error::CampaignNotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn load_roster(e: &Env, campaign_id: CampaignId) -> Vec<AdminSlot> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Roster(campaign_id))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn save_roster(e: &Env, campaign_id: CampaignId, roster: &Vec<AdminSlot>) {
    let key = PersistentKey::Roster(campaign_id);
    e.storage().persistent().set(&key, roster);
    extend_persistent(e, &key);
}

pub fn load_approvals(e: &Env, campaign_id: CampaignId) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Approvals(campaign_id))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn save_approvals(e: &Env, campaign_id: CampaignId, approvals: &Vec<Address>) {
    let key = PersistentKey::Approvals(campaign_id);
    e.storage().persistent().set(&key, approvals);
    extend_persistent(e, &key);
}

pub fn save_contribution(e: &Env, campaign_id: CampaignId, record: &ContributionRecord) {
    let key = PersistentKey::Contribution(campaign_id, record.sequence);
    e.storage().persistent().set(&key, record);
    extend_persistent(e, &key);
}

pub fn get_contribution(
    e: &Env,
    campaign_id: CampaignId,
    sequence: u32,
) -> Option<ContributionRecord> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, sequence))
}

pub fn get_contributor_total(e: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::ContributorTotal(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn set_contributor_total(
    e: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
    total: i128,
) {
    let key = PersistentKey::ContributorTotal(campaign_id, contributor.clone());
    e.storage().persistent().set(&key, &total);
    extend_persistent(e, &key);
}
