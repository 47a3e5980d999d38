mod bonding;
mod unbonding;
