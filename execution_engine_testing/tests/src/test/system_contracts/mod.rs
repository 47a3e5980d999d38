mod proof_of_stake;
