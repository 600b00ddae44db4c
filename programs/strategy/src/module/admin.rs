use anchor_lang::prelude::*;
use anchor_lang::system_program::{create_account, CreateAccount};
use anchor_lang::solana_program::program_pack::Pack;
use anchor_spl::token::spl_token;
use anchor_spl::token_2022::spl_token_2022::{
    self,
    extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
};
use anchor_spl::token_interface::{initialize_account3, InitializeAccount3};

use access_control::{state::Role, utils::check_role};

use crate::errors::ErrorCodes;
use crate::events::*;
use crate::state::*;

pub fn initialize(
    ctx: Context<InitStrategy>,
    index: u8,
    strategy_type: StrategyType,
    manager: Pubkey,
) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::StrategiesManager,
    )?;

    let strategy = &mut ctx.accounts.strategy;
    strategy.init(
        StrategyParams {
            vault: ctx.accounts.vault.key(),
            index,
            strategy_type,
            underlying_mint: ctx.accounts.underlying_mint.key(),
            underlying_token_account: ctx.accounts.underlying_token_account.key(),
            manager,
        },
        ctx.bumps.strategy,
    )?;

    emit!(LogInitStrategy {
        strategy: strategy.key(),
        vault: strategy.vault,
        index,
        strategy_type,
        underlying_mint: strategy.underlying_mint,
        manager,
    });

    Ok(())
}

pub fn init_invest_tracker(
    ctx: Context<InitInvestTracker>,
    asset_mint: Pubkey,
    yield_source: Pubkey,
) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::StrategiesManager,
    )?;

    let strategy_key = ctx.accounts.strategy.key();

    ctx.accounts.invest_tracker.init(
        asset_mint,
        strategy_key,
        yield_source,
        ctx.bumps.invest_tracker,
    )?;
    ctx.accounts.strategy.add_tracker(asset_mint)?;

    emit!(LogInitInvestTracker {
        strategy: strategy_key,
        invest_tracker: ctx.accounts.invest_tracker.key(),
        asset_mint,
        yield_source,
    });

    Ok(())
}

pub fn init_token_account(ctx: Context<InitTokenAccount>, asset_mint: Pubkey) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::StrategiesManager,
    )?;

    let token_account = &ctx.accounts.token_account;
    if !token_account.data_is_empty() {
        return err!(ErrorCodes::AlreadyExists);
    }

    let strategy_key = ctx.accounts.strategy.key();
    let bump = [ctx.bumps.token_account];
    let signer_seeds: &[&[&[u8]]] = &[&[
        TOKEN_ACCOUNT_SEED,
        asset_mint.as_ref(),
        strategy_key.as_ref(),
        &bump,
    ]];

    let space = token_account_space(&ctx.accounts.mint.to_account_info())?;
    let lamports = Rent::get()?.minimum_balance(space);

    create_account(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            CreateAccount {
                from: ctx.accounts.signer.to_account_info(),
                to: token_account.to_account_info(),
            },
            signer_seeds,
        ),
        lamports,
        space as u64,
        &ctx.accounts.token_program.key(),
    )?;

    initialize_account3(CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        InitializeAccount3 {
            account: token_account.to_account_info(),
            mint: ctx.accounts.mint.to_account_info(),
            authority: ctx.accounts.strategy.to_account_info(),
        },
    ))?;

    emit!(LogInitTokenAccount {
        strategy: strategy_key,
        token_account: token_account.key(),
        asset_mint,
    });

    Ok(())
}

/// Token-2022 accounts carry whatever extensions their mint requires.
fn token_account_space(mint: &AccountInfo) -> Result<usize> {
    if mint.owner == &spl_token::ID {
        return Ok(spl_token::state::Account::LEN);
    }

    let data = mint.data.borrow();
    let state = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&data)?;
    let required = ExtensionType::get_required_init_account_extensions(&state.get_extension_types()?);

    Ok(ExtensionType::try_calculate_account_len::<spl_token_2022::state::Account>(&required)?)
}

pub fn set_manager(ctx: Context<SetManager>, new_manager: Pubkey) -> Result<()> {
    check_role(
        &ctx.accounts.roles,
        &ctx.accounts.signer.key(),
        Role::StrategiesManager,
    )?;

    ctx.accounts.strategy.set_manager(new_manager)?;

    emit!(LogSetManager {
        strategy: ctx.accounts.strategy.key(),
        manager: new_manager,
    });

    Ok(())
}
