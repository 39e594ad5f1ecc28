//! Referral program operations.

use autumn_core::{
    CreateReferralCodeParams, RedeemReferralCodeParams, ReferralCode, ReferralRedemption,
};
use futures::future::{BoxFuture, FutureExt};

use crate::client::Autumn;
use crate::dispatch::{Operation, Outcome};

/// `POST /referrals/code`
pub const CREATE_CODE: Operation<CreateReferralCodeParams, ReferralCode> =
    Operation::new("referrals.create_code", create_code);

/// `POST /referrals/redeem`
pub const REDEEM_CODE: Operation<RedeemReferralCodeParams, ReferralRedemption> =
    Operation::new("referrals.redeem_code", redeem_code);

fn create_code(
    client: &Autumn,
    params: CreateReferralCodeParams,
) -> BoxFuture<'_, Outcome<ReferralCode>> {
    async move { client.post("/referrals/code", &params).await }.boxed()
}

fn redeem_code(
    client: &Autumn,
    params: RedeemReferralCodeParams,
) -> BoxFuture<'_, Outcome<ReferralRedemption>> {
    async move { client.post("/referrals/redeem", &params).await }.boxed()
}
