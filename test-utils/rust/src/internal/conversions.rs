//! Bridges solana-sdk 2 types used by the programs to the litesvm 3 types

use solana_account::Account as LiteAccount;
use solana_instruction::{AccountMeta as LiteAccountMeta, Instruction as LiteInstruction};
use solana_pubkey::Pubkey as LitePubkey;
use solana_sdk::{account::Account, instruction::Instruction, pubkey::Pubkey};

pub fn to_lite_pubkey(pubkey: &Pubkey) -> LitePubkey {
    LitePubkey::from(pubkey.to_bytes())
}

pub fn from_lite_pubkey(pubkey: &LitePubkey) -> Pubkey {
    Pubkey::from(pubkey.to_bytes())
}

pub fn to_lite_account(account: Account) -> LiteAccount {
    LiteAccount {
        lamports: account.lamports,
        data: account.data,
        owner: to_lite_pubkey(&account.owner),
        executable: account.executable,
        rent_epoch: account.rent_epoch,
    }
}

pub fn from_lite_account(account: LiteAccount) -> Account {
    Account {
        lamports: account.lamports,
        data: account.data,
        owner: from_lite_pubkey(&account.owner),
        executable: account.executable,
        rent_epoch: account.rent_epoch,
    }
}

pub fn to_lite_instruction(ix: Instruction) -> LiteInstruction {
    LiteInstruction {
        program_id: to_lite_pubkey(&ix.program_id),
        accounts: ix
            .accounts
            .into_iter()
            .map(|meta| LiteAccountMeta {
                pubkey: to_lite_pubkey(&meta.pubkey),
                is_signer: meta.is_signer,
                is_writable: meta.is_writable,
            })
            .collect(),
        data: ix.data,
    }
}
