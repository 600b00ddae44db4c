//! Instruction builders, setup flows and state readers for protocol tests

use {
    super::{
        ProtocolFixture, ACCESS_CONTROL_PROGRAM_ID, ACCOUNTANT_PROGRAM_ID,
        DEFAULT_PERFORMANCE_FEE, DEFAULT_WALLET_BALANCE, STRATEGY_PROGRAM_ID, VAULT_PROGRAM_ID,
    },
    access_control::state::{Role, RoleManagers, UserRole},
    accountant::state::{Accountant, AccountantParams},
    anchor_lang::prelude::*,
    anchor_lang::InstructionData,
    anchor_lang::ToAccountMetas,
    solana_sdk::instruction::{AccountMeta, Instruction},
    solana_sdk::signer::Signer as SolSigner,
    strategy::state::{InvestTracker, Strategy, StrategyType},
    vault::state::{Vault, VaultParams},
    vault_test_framework::prelude::*,
    vault_test_framework::Result as VmResult,
};

const SYSTEM_PROGRAM_ID: Pubkey = anchor_lang::system_program::ID;

fn build_ix<A: ToAccountMetas, I: InstructionData>(
    program_id: Pubkey,
    accounts: A,
    instruction: I,
) -> Instruction {
    Instruction {
        program_id,
        accounts: accounts.to_account_metas(None),
        data: instruction.data(),
    }
}

impl ProtocolFixture {
    fn send(&mut self, signer: &Keypair, ix: Instruction) -> VmResult<()> {
        self.vm.prank(signer.pubkey());
        self.vm.execute_as_prank(ix)?;
        Ok(())
    }

    /// Deploys the registry, one accountant and one vault, then funds alice and bob.
    ///
    /// Admin holds every operational role and is the KYC provider.
    pub fn setup(&mut self, params: VaultParams) -> VmResult<()> {
        let admin = self.admin.insecure_clone();

        self.init_access_control(&admin)?;
        for role in [
            Role::VaultsAdmin,
            Role::ReportingManager,
            Role::StrategiesManager,
            Role::AccountantAdmin,
            Role::KycProvider,
        ] {
            self.set_role(&admin, role, admin.pubkey())?;
        }

        self.init_accountants_config(&admin)?;
        self.init_accountant(
            &admin,
            AccountantParams {
                performance_fee: DEFAULT_PERFORMANCE_FEE,
                management_fee: 0,
                fee_recipient: self.fee_recipient.pubkey(),
            },
        )?;

        self.init_vault_config(&admin)?;
        self.init_vault(&admin, params)?;

        let (mint, shares_mint) = (self.underlying_mint, self.get_shares_mint());
        for user in [self.alice.pubkey(), self.bob.pubkey()] {
            self.vm.mint_tokens(&mint, &user, DEFAULT_WALLET_BALANCE)?;
        }

        let fee_recipient = self.fee_recipient.pubkey();
        self.vm.mint_tokens(&mint, &fee_recipient, 0)?;
        self.vm.mint_tokens(&shares_mint, &fee_recipient, 0)?;
        self.vm.mint_tokens(&mint, &self.yield_source.pubkey(), 0)?;

        Ok(())
    }

    // access control

    pub fn init_access_control_ix(&self, signer: &Pubkey) -> Instruction {
        build_ix(
            ACCESS_CONTROL_PROGRAM_ID,
            access_control::accounts::Initialize {
                signer: *signer,
                config: self.get_config(),
                role_managers: self.get_role_managers(),
                signer_roles_admin: self.get_user_role(signer, Role::RolesAdmin),
                system_program: SYSTEM_PROGRAM_ID,
            },
            access_control::instruction::Initialize {},
        )
    }

    pub fn set_role_manager_ix(
        &self,
        signer: &Pubkey,
        role: Role,
        manager_role: Role,
    ) -> Instruction {
        build_ix(
            ACCESS_CONTROL_PROGRAM_ID,
            access_control::accounts::SetRoleManager {
                signer: *signer,
                signer_roles_admin: self.get_user_role(signer, Role::RolesAdmin),
                role_managers: self.get_role_managers(),
            },
            access_control::instruction::SetRoleManager { role, manager_role },
        )
    }

    /// The signer's record for the role managing `role`, read from the live manager table
    fn signer_manager_role(&self, signer: &Pubkey, role: Role) -> VmResult<Pubkey> {
        let manager_role = self.read_role_managers()?.manager_of(role);
        Ok(self.get_user_role(signer, manager_role))
    }

    pub fn set_role_ix(&self, signer: &Pubkey, role: Role, user: Pubkey) -> VmResult<Instruction> {
        Ok(build_ix(
            ACCESS_CONTROL_PROGRAM_ID,
            access_control::accounts::SetRole {
                signer: *signer,
                signer_manager_role: self.signer_manager_role(signer, role)?,
                role_managers: self.get_role_managers(),
                user_role: self.get_user_role(&user, role),
                system_program: SYSTEM_PROGRAM_ID,
            },
            access_control::instruction::SetRole { role, user },
        ))
    }

    pub fn revoke_role_ix(
        &self,
        signer: &Pubkey,
        role: Role,
        user: Pubkey,
    ) -> VmResult<Instruction> {
        Ok(build_ix(
            ACCESS_CONTROL_PROGRAM_ID,
            access_control::accounts::RevokeRole {
                signer: *signer,
                signer_manager_role: self.signer_manager_role(signer, role)?,
                role_managers: self.get_role_managers(),
                user_role: self.get_user_role(&user, role),
                system_program: SYSTEM_PROGRAM_ID,
            },
            access_control::instruction::RevokeRole { role, user },
        ))
    }

    pub fn init_access_control(&mut self, signer: &Keypair) -> VmResult<()> {
        let ix = self.init_access_control_ix(&signer.pubkey());
        self.send(signer, ix)
    }

    pub fn set_role_manager(
        &mut self,
        signer: &Keypair,
        role: Role,
        manager_role: Role,
    ) -> VmResult<()> {
        let ix = self.set_role_manager_ix(&signer.pubkey(), role, manager_role);
        self.send(signer, ix)
    }

    pub fn set_role(&mut self, signer: &Keypair, role: Role, user: Pubkey) -> VmResult<()> {
        let ix = self.set_role_ix(&signer.pubkey(), role, user)?;
        self.send(signer, ix)
    }

    pub fn revoke_role(&mut self, signer: &Keypair, role: Role, user: Pubkey) -> VmResult<()> {
        let ix = self.revoke_role_ix(&signer.pubkey(), role, user)?;
        self.send(signer, ix)
    }

    // accountant

    pub fn init_accountants_config(&mut self, signer: &Keypair) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            ACCOUNTANT_PROGRAM_ID,
            accountant::accounts::InitAccountantsConfig {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::AccountantAdmin),
                config: self.get_accountants_config(),
                system_program: SYSTEM_PROGRAM_ID,
            },
            accountant::instruction::InitAccountantsConfig {},
        );
        self.send(signer, ix)
    }

    pub fn init_accountant(&mut self, signer: &Keypair, params: AccountantParams) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            ACCOUNTANT_PROGRAM_ID,
            accountant::accounts::InitAccountant {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::AccountantAdmin),
                config: self.get_accountants_config(),
                accountant: self.get_accountant(),
                system_program: SYSTEM_PROGRAM_ID,
            },
            accountant::instruction::InitAccountant { params },
        );
        self.send(signer, ix)
    }

    fn update_accountant_accounts(&self, signer: &Pubkey) -> accountant::accounts::UpdateAccountant {
        accountant::accounts::UpdateAccountant {
            signer: *signer,
            roles: self.get_user_role(signer, Role::AccountantAdmin),
            accountant: self.get_accountant(),
        }
    }

    pub fn set_performance_fee(&mut self, signer: &Keypair, fee: u64) -> VmResult<()> {
        let ix = build_ix(
            ACCOUNTANT_PROGRAM_ID,
            self.update_accountant_accounts(&signer.pubkey()),
            accountant::instruction::SetPerformanceFee { fee },
        );
        self.send(signer, ix)
    }

    pub fn set_management_fee(&mut self, signer: &Keypair, fee: u64) -> VmResult<()> {
        let ix = build_ix(
            ACCOUNTANT_PROGRAM_ID,
            self.update_accountant_accounts(&signer.pubkey()),
            accountant::instruction::SetManagementFee { fee },
        );
        self.send(signer, ix)
    }

    pub fn set_fee_recipient(&mut self, signer: &Keypair, recipient: Pubkey) -> VmResult<()> {
        let ix = build_ix(
            ACCOUNTANT_PROGRAM_ID,
            self.update_accountant_accounts(&signer.pubkey()),
            accountant::instruction::SetFeeRecipient { recipient },
        );
        self.send(signer, ix)
    }

    // vault administration

    pub fn init_vault_config(&mut self, signer: &Keypair) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::InitVaultConfig {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::VaultsAdmin),
                config: self.get_vaults_config(),
                system_program: SYSTEM_PROGRAM_ID,
            },
            vault::instruction::InitVaultConfig {},
        );
        self.send(signer, ix)
    }

    pub fn init_vault(&mut self, signer: &Keypair, params: VaultParams) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::InitVault {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::VaultsAdmin),
                config: self.get_vaults_config(),
                vault: self.get_vault(),
                underlying_mint: self.underlying_mint,
                shares_mint: self.get_shares_mint(),
                underlying_token_account: self.get_vault_underlying(),
                accountant: self.get_accountant(),
                token_program: spl_token::ID,
                system_program: SYSTEM_PROGRAM_ID,
            },
            vault::instruction::Initialize { params },
        );
        self.send(signer, ix)
    }

    fn update_vault_accounts(&self, signer: &Pubkey) -> vault::accounts::UpdateVault {
        vault::accounts::UpdateVault {
            signer: *signer,
            roles: self.get_user_role(signer, Role::VaultsAdmin),
            vault: self.get_vault(),
        }
    }

    pub fn set_deposit_limit(&mut self, signer: &Keypair, deposit_limit: u64) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.update_vault_accounts(&signer.pubkey()),
            vault::instruction::SetDepositLimit { deposit_limit },
        );
        self.send(signer, ix)
    }

    pub fn set_min_user_deposit(&mut self, signer: &Keypair, min_user_deposit: u64) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.update_vault_accounts(&signer.pubkey()),
            vault::instruction::SetMinUserDeposit { min_user_deposit },
        );
        self.send(signer, ix)
    }

    pub fn set_profit_unlock_period(
        &mut self,
        signer: &Keypair,
        profit_unlock_period: u64,
    ) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.update_vault_accounts(&signer.pubkey()),
            vault::instruction::SetProfitUnlockPeriod {
                profit_unlock_period,
            },
        );
        self.send(signer, ix)
    }

    pub fn set_whitelisted_only(&mut self, signer: &Keypair, whitelisted_only: bool) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.update_vault_accounts(&signer.pubkey()),
            vault::instruction::SetWhitelistedOnly { whitelisted_only },
        );
        self.send(signer, ix)
    }

    pub fn set_kyc_verified_only(
        &mut self,
        signer: &Keypair,
        kyc_verified_only: bool,
    ) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.update_vault_accounts(&signer.pubkey()),
            vault::instruction::SetKycVerifiedOnly { kyc_verified_only },
        );
        self.send(signer, ix)
    }

    pub fn shutdown_vault(&mut self, signer: &Keypair) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.update_vault_accounts(&signer.pubkey()),
            vault::instruction::ShutdownVault {},
        );
        self.send(signer, ix)
    }

    pub fn whitelist(&mut self, signer: &Keypair, user: Pubkey) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::Whitelist {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::VaultsAdmin),
                vault: self.get_vault(),
                user_data: self.get_user_data(&user),
                system_program: SYSTEM_PROGRAM_ID,
            },
            vault::instruction::Whitelist { user },
        );
        self.send(signer, ix)
    }

    pub fn remove_from_whitelist(&mut self, signer: &Keypair, user: Pubkey) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::RemoveFromWhitelist {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::VaultsAdmin),
                vault: self.get_vault(),
                user_data: self.get_user_data(&user),
            },
            vault::instruction::RemoveFromWhitelist { user },
        );
        self.send(signer, ix)
    }

    // strategy administration

    pub fn init_strategy_ix(
        &self,
        signer: &Pubkey,
        index: u8,
        strategy_type: StrategyType,
    ) -> Instruction {
        let strategy_key = self.get_strategy(index);

        build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::InitStrategy {
                signer: *signer,
                roles: self.get_user_role(signer, Role::StrategiesManager),
                vault: self.get_vault(),
                strategy: strategy_key,
                underlying_mint: self.underlying_mint,
                underlying_token_account: self.get_strategy_underlying(&strategy_key),
                token_program: spl_token::ID,
                system_program: SYSTEM_PROGRAM_ID,
            },
            strategy::instruction::Initialize {
                index,
                strategy_type,
                manager: self.keeper.pubkey(),
            },
        )
    }

    /// Creates the next strategy of the vault, managed by the keeper. Returns its slot.
    pub fn init_strategy(
        &mut self,
        signer: &Keypair,
        strategy_type: StrategyType,
    ) -> VmResult<usize> {
        let slot = self.strategies.len();
        let index = slot as u8;

        let ix = self.init_strategy_ix(&signer.pubkey(), index, strategy_type);
        self.send(signer, ix)?;

        self.strategies.push(self.get_strategy(index));
        Ok(slot)
    }

    /// Opens an invest tracker for a fresh asset mint, deploying into the yield source account.
    pub fn init_invest_tracker(&mut self, signer: &Keypair, slot: usize) -> VmResult<Pubkey> {
        let asset_mint = Pubkey::new_unique();
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);

        let ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::InitInvestTracker {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                strategy: strategy_key,
                invest_tracker: self.get_invest_tracker(&strategy_key, &asset_mint),
                system_program: SYSTEM_PROGRAM_ID,
            },
            strategy::instruction::InitInvestTracker {
                asset_mint,
                yield_source: self.yield_source.pubkey(),
            },
        );
        self.send(signer, ix)?;

        Ok(asset_mint)
    }

    pub fn init_token_account(
        &mut self,
        signer: &Keypair,
        slot: usize,
        mint: &Pubkey,
        token_program: &Pubkey,
    ) -> VmResult<Pubkey> {
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);
        let token_account = self.get_strategy_token_account(&strategy_key, mint);

        let ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::InitTokenAccount {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                strategy: strategy_key,
                mint: *mint,
                token_account,
                token_program: *token_program,
                system_program: SYSTEM_PROGRAM_ID,
            },
            strategy::instruction::InitTokenAccount { asset_mint: *mint },
        );
        self.send(signer, ix)?;

        Ok(token_account)
    }

    pub fn set_manager(&mut self, signer: &Keypair, slot: usize, new_manager: Pubkey) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::SetManager {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                strategy: self.strategy_key(slot),
            },
            strategy::instruction::SetManager { new_manager },
        );
        self.send(signer, ix)
    }

    // strategy keeper

    /// Revalues the strategy. Every tracker of the strategy is passed along in table order.
    pub fn report(&mut self, signer: &Keypair, slot: usize) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);
        let state = self.read_strategy(slot)?;

        let mut ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::Report {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::ReportingManager),
                strategy: strategy_key,
                underlying_token_account: state.underlying_token_account,
            },
            strategy::instruction::Report {},
        );
        ix.accounts.extend(state.trackers.iter().map(|asset_mint| {
            AccountMeta::new_readonly(self.get_invest_tracker(&strategy_key, asset_mint), false)
        }));

        self.send(signer, ix)
    }

    pub fn deploy_funds(
        &mut self,
        signer: &Keypair,
        slot: usize,
        asset_mint: Pubkey,
        amount: u64,
    ) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);

        let ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::DeployFunds {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                strategy: strategy_key,
                invest_tracker: self.get_invest_tracker(&strategy_key, &asset_mint),
                underlying_mint: self.underlying_mint,
                underlying_token_account: self.get_strategy_underlying(&strategy_key),
                yield_source_token_account: self.get_yield_source_account(),
                token_program: spl_token::ID,
            },
            strategy::instruction::DeployFunds { asset_mint, amount },
        );
        self.send(signer, ix)
    }

    pub fn free_funds(
        &mut self,
        signer: &Keypair,
        slot: usize,
        asset_mint: Pubkey,
        amount: u64,
    ) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);

        let ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::FreeFunds {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                strategy: strategy_key,
                invest_tracker: self.get_invest_tracker(&strategy_key, &asset_mint),
                underlying_token_account: self.get_strategy_underlying(&strategy_key),
            },
            strategy::instruction::FreeFunds { asset_mint, amount },
        );
        self.send(signer, ix)
    }

    pub fn update_invest_tracker(
        &mut self,
        signer: &Keypair,
        slot: usize,
        asset_mint: Pubkey,
        accrued_value: u64,
    ) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);

        let ix = build_ix(
            STRATEGY_PROGRAM_ID,
            strategy::accounts::UpdateInvestTracker {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                strategy: strategy_key,
                invest_tracker: self.get_invest_tracker(&strategy_key, &asset_mint),
            },
            strategy::instruction::UpdateInvestTracker {
                asset_mint,
                accrued_value,
            },
        );
        self.send(signer, ix)
    }

    // vault strategy management

    pub fn add_strategy(&mut self, signer: &Keypair, slot: usize, max_debt: u64) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::AddStrategy {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::VaultsAdmin),
                vault: self.get_vault(),
                strategy: self.strategy_key(slot),
            },
            vault::instruction::AddStrategy { max_debt },
        );
        self.send(signer, ix)
    }

    fn manage_strategy_accounts(&self, signer: &Pubkey, slot: usize) -> vault::accounts::ManageStrategy {
        vault::accounts::ManageStrategy {
            signer: *signer,
            roles: self.get_user_role(signer, Role::VaultsAdmin),
            vault: self.get_vault(),
            strategy: self.strategy_key(slot),
        }
    }

    pub fn remove_strategy(&mut self, signer: &Keypair, slot: usize) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.manage_strategy_accounts(&signer.pubkey(), slot),
            vault::instruction::RemoveStrategy {},
        );
        self.send(signer, ix)
    }

    pub fn update_max_debt(&mut self, signer: &Keypair, slot: usize, max_debt: u64) -> VmResult<()> {
        let ix = build_ix(
            VAULT_PROGRAM_ID,
            self.manage_strategy_accounts(&signer.pubkey(), slot),
            vault::instruction::UpdateMaxDebt { max_debt },
        );
        self.send(signer, ix)
    }

    pub fn update_debt(&mut self, signer: &Keypair, slot: usize, new_debt: u64) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let strategy_key = self.strategy_key(slot);

        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::UpdateDebt {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::StrategiesManager),
                vault: self.get_vault(),
                strategy: strategy_key,
                underlying_mint: self.underlying_mint,
                underlying_token_account: self.get_vault_underlying(),
                strategy_token_account: self.get_strategy_underlying(&strategy_key),
                token_program: spl_token::ID,
                strategy_program: STRATEGY_PROGRAM_ID,
            },
            vault::instruction::UpdateDebt { new_debt },
        );
        self.send(signer, ix)
    }

    pub fn process_report(&mut self, signer: &Keypair, slot: usize) -> VmResult<()> {
        let signer_key = signer.pubkey();
        let shares_mint = self.get_shares_mint();
        let fee_recipient = self.read_accountant()?.fee_recipient;

        let ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::ProcessReport {
                signer: signer_key,
                roles: self.get_user_role(&signer_key, Role::ReportingManager),
                vault: self.get_vault(),
                strategy: self.strategy_key(slot),
                accountant: self.get_accountant(),
                shares_mint,
                fee_recipient_shares_account: self.vm.get_ata(&fee_recipient, &shares_mint),
                token_program: spl_token::ID,
            },
            vault::instruction::ProcessReport {},
        );
        self.send(signer, ix)
    }

    // users

    pub fn deposit_ix(&self, user: &Pubkey, amount: u64) -> Instruction {
        let shares_mint = self.get_shares_mint();
        build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::Deposit {
                user: *user,
                vault: self.get_vault(),
                underlying_mint: self.underlying_mint,
                underlying_token_account: self.get_vault_underlying(),
                user_token_account: self.vm.get_ata(user, &self.underlying_mint),
                shares_mint,
                user_shares_account: self.vm.get_ata(user, &shares_mint),
                user_data: self.get_user_data(user),
                kyc_role: self.get_user_role(user, Role::KycVerified),
                token_program: spl_token::ID,
                associated_token_program: spl_associated_token_account::ID,
                system_program: SYSTEM_PROGRAM_ID,
            },
            vault::instruction::Deposit { amount },
        )
    }

    pub fn deposit(&mut self, user: &Keypair, amount: u64) -> VmResult<()> {
        let ix = self.deposit_ix(&user.pubkey(), amount);
        self.send(user, ix)
    }

    /// Withdraw offering strategies by slot, as `[strategy, strategy underlying]` pairs
    pub fn withdraw_ix(&self, user: &Pubkey, shares: u64, offered: &[Pubkey]) -> Instruction {
        let shares_mint = self.get_shares_mint();
        let mut ix = build_ix(
            VAULT_PROGRAM_ID,
            vault::accounts::Withdraw {
                user: *user,
                vault: self.get_vault(),
                underlying_mint: self.underlying_mint,
                underlying_token_account: self.get_vault_underlying(),
                user_token_account: self.vm.get_ata(user, &self.underlying_mint),
                shares_mint,
                user_shares_account: self.vm.get_ata(user, &shares_mint),
                token_program: spl_token::ID,
                strategy_program: STRATEGY_PROGRAM_ID,
            },
            vault::instruction::Withdraw { shares },
        );

        for strategy_key in offered {
            ix.accounts.push(AccountMeta::new(*strategy_key, false));
            ix.accounts
                .push(AccountMeta::new(self.get_strategy_underlying(strategy_key), false));
        }

        ix
    }

    /// Withdraw offering the vault's whole withdraw queue
    pub fn withdraw(&mut self, user: &Keypair, shares: u64) -> VmResult<()> {
        let mut queue = self.read_vault()?.strategies;
        queue.sort_by_key(|data| data.index);
        let offered: Vec<Pubkey> = queue.iter().map(|data| data.key).collect();

        let ix = self.withdraw_ix(&user.pubkey(), shares, &offered);
        self.send(user, ix)
    }

    pub fn withdraw_with_strategies(
        &mut self,
        user: &Keypair,
        shares: u64,
        slots: &[usize],
    ) -> VmResult<()> {
        let offered: Vec<Pubkey> = slots.iter().map(|&slot| self.strategy_key(slot)).collect();
        let ix = self.withdraw_ix(&user.pubkey(), shares, &offered);
        self.send(user, ix)
    }

    // balance manipulation

    /// Credits yield straight into the strategy's token account
    pub fn airdrop_to_strategy(&mut self, slot: usize, amount: u64) -> VmResult<()> {
        let account = self.get_strategy_underlying(&self.strategy_key(slot));
        let balance = self.vm.token_account_balance(&account);
        self.vm.set_token_amount(&account, balance + amount)
    }

    /// Removes funds from the strategy's token account, as a loss would
    pub fn drain_strategy(&mut self, slot: usize, amount: u64) -> VmResult<()> {
        let account = self.get_strategy_underlying(&self.strategy_key(slot));
        let balance = self.vm.token_account_balance(&account);
        self.vm.set_token_amount(&account, balance.saturating_sub(amount))
    }

    /// Moves `amount` from the yield source back to the strategy, ahead of `free_funds`
    pub fn return_from_yield_source(&mut self, slot: usize, amount: u64) -> VmResult<()> {
        let source = self.get_yield_source_account();
        let source_balance = self.vm.token_account_balance(&source);
        self.vm.set_token_amount(&source, source_balance.saturating_sub(amount))?;
        self.airdrop_to_strategy(slot, amount)
    }

    // readers

    pub fn read_vault(&self) -> VmResult<Vault> {
        self.vm.read_anchor_account(&self.get_vault())
    }

    pub fn read_strategy(&self, slot: usize) -> VmResult<Strategy> {
        self.vm.read_anchor_account(&self.strategy_key(slot))
    }

    pub fn read_invest_tracker(&self, slot: usize, asset_mint: &Pubkey) -> VmResult<InvestTracker> {
        self.vm
            .read_anchor_account(&self.get_invest_tracker(&self.strategy_key(slot), asset_mint))
    }

    pub fn read_accountant(&self) -> VmResult<Accountant> {
        self.vm.read_anchor_account(&self.get_accountant())
    }

    pub fn read_role_managers(&self) -> VmResult<RoleManagers> {
        self.vm.read_anchor_account(&self.get_role_managers())
    }

    pub fn has_role(&self, user: &Pubkey, role: Role) -> bool {
        self.vm
            .read_anchor_account::<UserRole>(&self.get_user_role(user, role))
            .map(|record| record.holds(user, role))
            .unwrap_or(false)
    }

    pub fn current_debt(&self, slot: usize) -> VmResult<u64> {
        let strategy_key = self.strategy_key(slot);
        self.read_vault()?
            .strategies
            .iter()
            .find(|data| data.key == strategy_key)
            .map(|data| data.current_debt)
            .ok_or_else(|| VmError::Custom(format!("strategy {} not linked", strategy_key)))
    }

    /// Underlying in the user's wallet
    pub fn wallet_of(&self, user: &Pubkey) -> u64 {
        self.vm.token_balance(user, &self.underlying_mint)
    }

    pub fn shares_of(&self, user: &Pubkey) -> u64 {
        self.vm.token_balance(user, &self.get_shares_mint())
    }

    pub fn vault_balance(&self) -> u64 {
        self.vm.token_account_balance(&self.get_vault_underlying())
    }

    pub fn strategy_balance(&self, slot: usize) -> u64 {
        self.vm
            .token_account_balance(&self.get_strategy_underlying(&self.strategy_key(slot)))
    }

    pub fn now(&self) -> i64 {
        self.vm.timestamp()
    }
}
