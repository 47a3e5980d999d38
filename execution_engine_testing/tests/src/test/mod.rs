mod system_contracts;
